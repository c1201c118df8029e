//! Cisco Service API client (customer inventory).
//!
//! Inventory queries are scoped to a single customer/inventory pair, so
//! unlike the Support endpoints there is nothing to batch: each operation
//! is one GET with query parameters.

use eoxide_core::Record;
use eoxide_fetch::ApiContext;
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::error::EndpointError;
use crate::support::API_BASE;

// ============================================================================
// Constants
// ============================================================================

/// Hardware inventory endpoint path.
const HARDWARE_PATH: &str = "/cs/api/v1/inventory/hardware";

/// Network elements inventory endpoint path.
const NETWORK_ELEMENTS_PATH: &str = "/cs/api/v1/inventory/network-elements";

// ============================================================================
// Response Envelope
// ============================================================================

/// Envelope shared by the inventory endpoints.
#[derive(Debug, Deserialize)]
struct InventoryResponse {
    /// Inventory rows. Absent when the inventory is empty.
    #[serde(default)]
    data: Vec<Record>,
}

// ============================================================================
// Inventory Client
// ============================================================================

/// Client for the Cisco Service API inventory endpoints.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    ctx: ApiContext,
    base_url: String,
}

impl InventoryClient {
    /// Creates a client against the Cisco API gateway.
    pub fn new(ctx: ApiContext) -> Self {
        Self {
            ctx,
            base_url: API_BASE.to_string(),
        }
    }

    /// Overrides the gateway base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Queries the hardware inventory of one customer.
    ///
    /// `inventory_name` and `hw_type` narrow the result when given;
    /// `hw_type` takes values like `Chassis`, `Module`, `Fan`,
    /// `Power Supply`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or an unparseable
    /// body. An empty inventory is an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn query_hardware_inventory(
        &self,
        customer_id: &str,
        inventory_name: Option<&str>,
        hw_type: Option<&str>,
    ) -> Result<Vec<Record>, EndpointError> {
        let mut params: Vec<(&str, &str)> = vec![("customerId", customer_id)];
        if let Some(name) = inventory_name {
            params.push(("inventoryName", name));
        }
        if let Some(hw) = hw_type {
            params.push(("hwType", hw));
        }

        self.fetch_inventory(HARDWARE_PATH, &params).await
    }

    /// Queries the network-element inventory of one customer.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or an unparseable
    /// body. An empty inventory is an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn query_network_elements_inventory(
        &self,
        customer_id: &str,
        inventory_name: Option<&str>,
    ) -> Result<Vec<Record>, EndpointError> {
        let mut params: Vec<(&str, &str)> = vec![("customerId", customer_id)];
        if let Some(name) = inventory_name {
            params.push(("inventoryName", name));
        }

        self.fetch_inventory(NETWORK_ELEMENTS_PATH, &params).await
    }

    async fn fetch_inventory(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Record>, EndpointError> {
        let url = format!("{}{}", self.base_url, path);
        let auth_header = self.ctx.token().authorization_header();

        let response = self
            .ctx
            .http()
            .get_with_auth_and_query(&url, &auth_header, params)
            .await?;
        let body = response.text().await?;

        let envelope: InventoryResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse inventory response");
            EndpointError::InvalidResponse(e.to_string())
        })?;

        Ok(envelope.data)
    }
}

// ============================================================================
// Tests
// ============================================================================
