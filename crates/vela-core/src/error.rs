//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] vela_navigation::NavigationError),

    #[error("Page error: {0}")]
    Page(#[from] vela_page::PageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Contact form is not present on the page")]
    MissingForm,

    #[error("Shell not initialized")]
    NotInitialized,
}
