//! Query context shared by endpoint clients.

use crate::auth::AccessToken;
use crate::client::HttpClient;

/// Explicit context object carrying the HTTP client and the current
/// access token.
///
/// Endpoint clients take an `ApiContext` at construction instead of
/// reaching for process-global token state, so multiple credential sets
/// can coexist in one process. The context is cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiContext {
    http: HttpClient,
    token: AccessToken,
}

impl ApiContext {
    /// Creates a context from a client and a token.
    pub fn new(http: HttpClient, token: AccessToken) -> Self {
        Self { http, token }
    }

    /// The HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The current access token.
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns true if the held token is still valid.
    pub fn is_token_valid(&self) -> bool {
        self.token.is_valid()
    }

    /// Replaces the held token after an explicit re-authentication.
    pub fn replace_token(&mut self, token: AccessToken) {
        self.token = token;
    }
}
