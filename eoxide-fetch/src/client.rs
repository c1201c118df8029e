//! HTTP client abstractions.

use crate::error::FetchError;
use reqwest::{Client, Response, header};
use std::time::Duration;
use tracing::debug;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for authenticated API queries.
///
/// Requests are single-shot: failures surface to the caller as-is, with no
/// retry or backoff.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("eoxide/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Performs a GET request with a bearer authorization header.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::AuthenticationFailed` on 401,
    /// `FetchError::InvalidResponse` on any other non-success status, and
    /// `FetchError::Http` on transport failures.
    pub async fn get_with_auth(
        &self,
        url: &str,
        auth_header: &str,
    ) -> Result<Response, FetchError> {
        self.get_with_auth_and_query::<[(&str, &str); 0]>(url, auth_header, &[])
            .await
    }

    /// Performs a GET request with a bearer authorization header and query
    /// parameters.
    pub async fn get_with_auth_and_query<Q>(
        &self,
        url: &str,
        auth_header: &str,
        query: &Q,
    ) -> Result<Response, FetchError>
    where
        Q: serde::Serialize + ?Sized,
    {
        debug!(url = %url, "Making GET request");

        let response = self
            .inner
            .get(url)
            .header(header::AUTHORIZATION, auth_header)
            .header(header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FetchError::AuthenticationFailed(
                "Invalid or expired bearer token".to_string(),
            ));
        }

        if !status.is_success() {
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status code: {status}"
            )));
        }

        Ok(response)
    }
}

impl Default for HttpClient {
    /// Creates a default HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should only happen
    /// if the system's TLS configuration is broken, which indicates a
    /// fundamentally broken environment where the application cannot function.
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            panic!(
                "Failed to create default HTTP client: {}. \
                This usually indicates a broken TLS/SSL configuration.",
                e
            )
        })
    }
}
