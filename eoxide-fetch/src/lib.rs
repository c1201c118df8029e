// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Eoxide Fetch
//!
//! HTTP transport, OAuth2 authentication and query batching for the Eoxide
//! client library.
//!
//! ## Components
//!
//! - [`auth`] - OAuth2 client-credentials token exchange against Cisco SSO
//! - [`client`] - Thin `reqwest` wrapper for authenticated GET requests
//! - [`context`] - [`ApiContext`], the explicit token-plus-client object
//!   passed to endpoint clients
//! - [`batch`] - The batching query engine (dedup, partition, sequential
//!   fetch, merge)
//!
//! ## Example
//!
//! ```ignore
//! use eoxide_fetch::{ApiContext, Authenticator, Credentials, HttpClient};
//!
//! let credentials = Credentials::new(client_key, client_secret);
//! let token = Authenticator::new()?.authenticate(&credentials).await?;
//! let ctx = ApiContext::new(HttpClient::new()?, token);
//!
//! // Re-authenticate explicitly when the token lapses.
//! if !ctx.is_token_valid() {
//!     /* authenticate again and replace the token */
//! }
//! ```

pub mod auth;
pub mod batch;
pub mod client;
pub mod context;
pub mod error;

// Re-export key types at crate root
pub use auth::{AccessToken, Authenticator, Credentials};
pub use batch::{batch_query, dedup_preserving_order, partition_into_batches};
pub use client::HttpClient;
pub use context::ApiContext;
pub use error::{AuthError, FetchError};
