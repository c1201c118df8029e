//! Fetch and authentication error types.

use thiserror::Error;

// ============================================================================
// Authentication Error
// ============================================================================

/// Error type for OAuth2 token exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// HTTP request failed before a status was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint returned a non-success status.
    #[error("Authentication rejected with status {status}")]
    Rejected {
        /// HTTP status code returned by the token endpoint.
        status: u16,
    },

    /// The token endpoint returned a payload we could not parse.
    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

// ============================================================================
// Fetch Error
// ============================================================================

/// Error type for query operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected our bearer token.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an unexpected status or body.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] eoxide_core::CoreError),
}
