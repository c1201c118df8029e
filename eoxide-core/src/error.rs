//! Core error types for Eoxide.

use thiserror::Error;

/// Core error type for Eoxide operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was absent from a record.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Invalid data from an API response.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
