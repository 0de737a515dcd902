//! Error types for notegen.

use thiserror::Error;

/// Result type alias using notegen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notegen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Note not found (or caller is not the owner)
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Text extraction from an uploaded file failed
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Unsupported upload content type
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Authentication/authorization failed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Internal(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
