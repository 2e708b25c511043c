//! VELA Page Surfaces
//!
//! The Rust side owns all page state; a frontend is a stateless renderer
//! of it. This crate holds that state: an in-memory model of the document
//! (section panels, nav links, header, tab title, scroll, contact form)
//! and of the window history stack, plus the narrow traits the navigation
//! controller drives them through.

mod document;
mod error;
mod history;

pub use document::{DocumentSurface, NavLink, PageDocument, SectionPanel, SubmitEvent};
pub use error::PageError;
pub use history::{HistoryDriver, HistoryRecord, WindowHistory};

pub type Result<T> = std::result::Result<T, PageError>;
