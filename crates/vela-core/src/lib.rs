//! VELA Core
//!
//! Central coordination layer for the VELA page shell. Rust owns all
//! page state; any frontend renders from it.

mod config;
mod error;
mod shell;

pub use config::Config;
pub use error::ShellError;
pub use shell::Shell;

// Re-export core components
pub use vela_forms::{ContactFormHandler, Submission};
pub use vela_navigation::{NavigationController, NavigationError, RenderReport, Transition};
pub use vela_page::{
    DocumentSurface, HistoryDriver, HistoryRecord, NavLink, PageDocument, PageError, SectionPanel,
    SubmitEvent, WindowHistory,
};
pub use vela_sections::{SectionDescriptor, SectionRegistry};

pub type Result<T> = std::result::Result<T, ShellError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
