// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Eoxide Endpoints
//!
//! Endpoint clients for Cisco's Support and Service REST APIs.
//!
//! - [`support::SupportClient`] - EoX records by product ID and SN2Info
//!   coverage summaries by serial number, batched per the documented
//!   per-call limits
//! - [`service::InventoryClient`] - customer hardware and network-element
//!   inventory, single calls scoped to one customer
//!
//! All query operations take their token and HTTP client from an
//! [`eoxide_fetch::ApiContext`] and return a fresh `Vec<Record>` per call.
//!
//! ## Example
//!
//! ```ignore
//! use eoxide_endpoints::SupportClient;
//!
//! let support = SupportClient::new(ctx);
//! let records = support.query_by_pid(&pids).await?;
//! for record in &records {
//!     println!("{:?}", record.display_value("LastDateOfSupport"));
//! }
//! ```

pub mod error;
pub mod service;
pub mod support;

// Re-export key types at crate root
pub use error::EndpointError;
pub use service::InventoryClient;
pub use support::{EOX_PID_BATCH_SIZE, SN2INFO_BATCH_SIZE, SupportClient};
