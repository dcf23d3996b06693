//! Error types for folio_app

use folio_content::ContentError;
use thiserror::Error;

/// Errors that can occur while starting the portfolio
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Portfolio content could not be loaded
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for FolioError {
    fn from(err: anyhow::Error) -> Self {
        FolioError::Other(format!("{err:#}"))
    }
}

/// Result type for folio_app operations
pub type Result<T> = std::result::Result<T, FolioError>;
