//! Error types for folio_content

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading portfolio content
///
/// Only loading can fail. Missing optional fields and questionable values
/// are reported as [`ContentWarning`](crate::ContentWarning)s instead.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML content did not match the schema
    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON content did not match the schema
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported content format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// Result type for folio_content operations
pub type Result<T> = std::result::Result<T, ContentError>;
