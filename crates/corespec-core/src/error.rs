//! Error types for reference data and rendering.
//!
//! Per-name rejections are not errors of this kind; see
//! [`RejectReason`](crate::validate::RejectReason).

use std::path::PathBuf;

/// Errors raised while loading reference lists or rendering output.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error reading a reference list.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference list file not found.
    #[error("reference list not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Unknown output format name.
    #[error("unknown output format '{0}' (expected text, json, or toml)")]
    UnknownFormat(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
