//! VELA Navigation
//!
//! Owns the current-section state and keeps the page and the window
//! history in sync with it. Planning a section change is pure and
//! rejects unknown ids before anything mutates; rendering goes through
//! the injected page surfaces so the logic stays testable on its own.

mod controller;
mod error;
mod transition;

pub use controller::{NavigationController, RenderReport};
pub use error::NavigationError;
pub use transition::{plan, Transition};

pub type Result<T> = std::result::Result<T, NavigationError>;
