//! Error types for patch notes rendering and loading

use thiserror::Error;

/// Main error type for patch notes operations
#[derive(Error, Debug)]
pub enum PatchNotesError {
    /// The designated list container is not present on the host page
    #[error("List container not found: #{0}")]
    MissingContainer(String),

    /// General I/O error while reading data files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The data document is not valid JSON or has the wrong shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using PatchNotesError
pub type PatchResult<T> = Result<T, PatchNotesError>;
