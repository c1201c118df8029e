//! CLI command implementations.

pub mod eox;
pub mod inventory;
pub mod serial;

use anyhow::{Context, Result};
use eoxide_fetch::{ApiContext, Authenticator, Credentials, HttpClient};
use tracing::debug;

use crate::Cli;

/// Authenticates and builds the query context shared by all commands.
pub(crate) async fn build_context(cli: &Cli) -> Result<ApiContext> {
    let (Some(key), Some(secret)) = (&cli.client_key, &cli.client_secret) else {
        anyhow::bail!(
            "credentials required: pass --client-key/--client-secret or set \
             CISCO_CLIENT_KEY/CISCO_CLIENT_SECRET"
        );
    };

    let credentials = Credentials::new(key.as_str(), secret.as_str());
    let token = Authenticator::new()?
        .authenticate(&credentials)
        .await
        .context("token exchange failed")?;
    debug!(expires_at = %token.expires_at(), "Authenticated");

    Ok(ApiContext::new(HttpClient::new()?, token))
}
