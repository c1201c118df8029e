//! Endpoint error types.

use eoxide_fetch::FetchError;
use thiserror::Error;

/// Error type for endpoint client operations.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// Transport or authentication failure.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The endpoint returned a body we could not parse.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for EndpointError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(FetchError::Http(err))
    }
}
