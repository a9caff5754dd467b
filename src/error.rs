//! Error types for the page core

use thiserror::Error;

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering a page.
///
/// Generation, reveal latching and scroll tracking never fail; only
/// configuration and serialization surface errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to render or serialize page state
    #[error("Rendering failed: {0}")]
    RenderError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::RenderError(err.to_string())
    }
}
