//! OAuth2 client-credentials authentication.
//!
//! Cisco's Support and Service APIs authenticate through Cisco SSO with a
//! client-credentials grant. The [`Authenticator`] exchanges a client key
//! and secret for a bearer [`AccessToken`] with a computed expiry.
//!
//! There is no silent refresh: [`AccessToken::is_valid`] only reports
//! whether the expiry has passed, and callers re-authenticate explicitly
//! when it has. This keeps call cadence under the caller's control.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::error::AuthError;

/// Cisco SSO token endpoint.
const TOKEN_URL: &str = "https://id.cisco.com/oauth2/default/v1/token";

/// Timeout for token exchange requests, in seconds.
const TOKEN_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Credentials
// ============================================================================

/// API client key and secret, supplied by the caller.
///
/// The library never reads credentials from the environment itself.
#[derive(Clone)]
pub struct Credentials {
    client_key: String,
    client_secret: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(client_key: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_key: client_key.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client key.
    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_key", &self.client_key)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Access Token
// ============================================================================

/// Token endpoint response body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    /// Token type, e.g. "Bearer".
    token_type: String,
    /// The access token itself.
    access_token: String,
    /// Token lifetime in seconds.
    expires_in: i64,
}

/// A bearer access token with its computed expiry.
#[derive(Debug, Clone)]
pub struct AccessToken {
    token_type: String,
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token from its parts.
    pub fn new(
        token_type: impl Into<String>,
        access_token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token_type: token_type.into(),
            access_token: access_token.into(),
            expires_at,
        }
    }

    /// Returns true if the current time is before the token's expiry.
    ///
    /// Does not refresh: on invalidity the caller re-authenticates
    /// explicitly via [`Authenticator::authenticate`].
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }

    /// When this token expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// The `Authorization` header value for this token,
    /// e.g. `"Bearer 0123456789abcdef"`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

// ============================================================================
// Authenticator
// ============================================================================

/// Performs the OAuth2 client-credentials token exchange.
#[derive(Debug, Clone)]
pub struct Authenticator {
    http: reqwest::Client,
    token_url: String,
}

impl Authenticator {
    /// Creates an authenticator against the Cisco SSO token endpoint.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_token_url(TOKEN_URL)
    }

    /// Creates an authenticator against a custom token endpoint.
    pub fn with_token_url(token_url: impl Into<String>) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(TOKEN_TIMEOUT_SECS))
            .user_agent(concat!("eoxide/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token_url: token_url.into(),
        })
    }

    /// Exchanges credentials for an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` on a non-success status,
    /// `AuthError::MalformedResponse` if the payload cannot be parsed, and
    /// `AuthError::Http` on transport failures. No retry is attempted.
    #[instrument(skip(self, credentials))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        debug!(client_key = %credentials.client_key(), "Requesting access token");

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_key()),
            ("client_secret", credentials.client_secret()),
        ];

        let response = self.http.post(&self.token_url).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Token exchange rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse token response");
            AuthError::MalformedResponse(e.to_string())
        })?;

        let expires_at = Utc::now() + ChronoDuration::seconds(token.expires_in);
        debug!(expires_at = %expires_at, "Access token acquired");

        Ok(AccessToken::new(
            token.token_type,
            token.access_token,
            expires_at,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let json = r#"{
            "access_token": "0123456789abcdef",
            "token_type": "Bearer",
            "expires_in": 3599
        }"#;

        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.access_token, "0123456789abcdef");
        assert_eq!(token.expires_in, 3599);
    }

    #[test]
    fn test_parse_token_response_missing_fields() {
        let json = r#"{"error": "invalid_client"}"#;
        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }

    #[test]
    fn test_token_validity_around_expiry() {
        let future = AccessToken::new(
            "Bearer",
            "tok",
            Utc::now() + ChronoDuration::seconds(60),
        );
        assert!(future.is_valid());

        let past = AccessToken::new(
            "Bearer",
            "tok",
            Utc::now() - ChronoDuration::seconds(1),
        );
        assert!(!past.is_valid());
    }

    #[test]
    fn test_authorization_header_format() {
        let token = AccessToken::new("Bearer", "0123456789abcdef", Utc::now());
        assert_eq!(token.authorization_header(), "Bearer 0123456789abcdef");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("my-key", "my-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("my-key"));
        assert!(!printed.contains("my-secret"));
    }
}
