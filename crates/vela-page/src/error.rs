//! Page error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
