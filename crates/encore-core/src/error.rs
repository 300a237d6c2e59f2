//! Error types for Encore

use thiserror::Error;

/// Crate-level error for configuration, catalog, and file operations.
///
/// The checkout, viewport, and preload modules carry their own narrower
/// error enums; this one covers everything that touches disk.
#[derive(Error, Debug)]
pub enum EncoreError {
    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized for saving
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Catalog JSON was malformed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using EncoreError
pub type EncoreResult<T> = Result<T, EncoreError>;
