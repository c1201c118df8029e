//! Cisco Support API client (EoX and SN2Info).
//!
//! Two read-only endpoints:
//!
//! - **EoX by product ID** - End-of-Life/End-of-Support milestone records,
//!   up to 20 PIDs per call
//! - **SN2Info coverage summary** - serial-number-to-coverage lookups,
//!   up to 75 serial numbers per call
//!
//! Both go through the batching query engine: identifiers are scrubbed of
//! junk values, deduplicated, partitioned per the endpoint limit, and
//! queried one batch at a time.

use eoxide_core::Record;
use eoxide_fetch::{ApiContext, batch_query};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::error::EndpointError;

// ============================================================================
// Constants
// ============================================================================

/// Cisco API gateway base URL.
pub(crate) const API_BASE: &str = "https://apix.cisco.com";

/// Maximum product IDs per EoX call, per the API documentation.
pub const EOX_PID_BATCH_SIZE: usize = 20;

/// Maximum serial numbers per SN2Info call, per the API documentation.
pub const SN2INFO_BATCH_SIZE: usize = 75;

/// EoX-by-PID endpoint path. The trailing `1` is the page index; results
/// beyond the first page are not fetched.
const EOX_BY_PID_PATH: &str = "/supporttools/eox/rest/5/EOXByProductID/1";

/// SN2Info coverage summary endpoint path.
const SN2INFO_PATH: &str = "/sn2info/v2/coverage/summary/serial_numbers";

/// Junk identifier values produced by common inventory-scraping sources,
/// dropped before querying.
const JUNK_IDENTIFIERS: &[&str] = &["", "n/a", "unknown", "unspecified"];

/// Additional junk values seen in scraped PID columns.
const JUNK_PIDS: &[&str] = &["b", "p", "^mf", "x"];

// ============================================================================
// Response Envelopes
// ============================================================================

/// Envelope of the EoX-by-PID endpoint.
#[derive(Debug, Deserialize)]
struct EoxResponse {
    /// EoX milestone records. Absent when nothing matched.
    #[serde(rename = "EOXRecord", default)]
    records: Vec<Record>,
}

/// Envelope of the SN2Info coverage summary endpoint.
#[derive(Debug, Deserialize)]
struct SerialInfoResponse {
    /// Coverage summaries, one per recognized serial number.
    #[serde(default)]
    serial_numbers: Vec<Record>,
}

// ============================================================================
// Support Client
// ============================================================================

/// Client for the Cisco Support API (EoX and SN2Info endpoints).
#[derive(Debug, Clone)]
pub struct SupportClient {
    ctx: ApiContext,
    base_url: String,
}

impl SupportClient {
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

    /// Queries EoX records by product ID, 20 PIDs per call.
    ///
    /// PIDs are trimmed and scrubbed of junk values before deduplication.
    /// Returns the concatenated records of every batch; an unmatched PID
    /// simply contributes nothing.
    ///
    /// # Errors
    ///
    /// The first failing batch aborts the query; no partial results are
    /// returned.
    #[instrument(skip(self, pids))]
    pub async fn query_by_pid(&self, pids: &[String]) -> Result<Vec<Record>, EndpointError> {
        let candidates = scrub_identifiers(pids, JUNK_PIDS);

        batch_query(&candidates, EOX_PID_BATCH_SIZE, async |group: Vec<String>| {
            let url = format!("{}{}/{}", self.base_url, EOX_BY_PID_PATH, group.join(","));
            let body = self.fetch_body(&url).await?;

            let envelope: EoxResponse = serde_json::from_str(&body).map_err(|e| {
                warn!(error = %e, "Failed to parse EoX response");
                EndpointError::InvalidResponse(e.to_string())
            })?;

            Ok(envelope.records)
        })
        .await
    }

    /// Queries coverage summaries by serial number, 75 serials per call.
    ///
    /// Serial numbers are trimmed and scrubbed of junk values before
    /// deduplication.
    ///
    /// # Errors
    ///
    /// The first failing batch aborts the query; no partial results are
    /// returned.
    #[instrument(skip(self, serial_numbers))]
    pub async fn query_by_serial(
        &self,
        serial_numbers: &[String],
    ) -> Result<Vec<Record>, EndpointError> {
        let candidates = scrub_identifiers(serial_numbers, &[]);

        batch_query(&candidates, SN2INFO_BATCH_SIZE, async |group: Vec<String>| {
            let url = format!("{}{}/{}", self.base_url, SN2INFO_PATH, group.join(","));
            let body = self.fetch_body(&url).await?;

            let envelope: SerialInfoResponse = serde_json::from_str(&body).map_err(|e| {
                warn!(error = %e, "Failed to parse SN2Info response");
                EndpointError::InvalidResponse(e.to_string())
            })?;

            Ok(envelope.serial_numbers)
        })
        .await
    }

    async fn fetch_body(&self, url: &str) -> Result<String, EndpointError> {
        let auth_header = self.ctx.token().authorization_header();
        let response = self.ctx.http().get_with_auth(url, &auth_header).await?;
        Ok(response.text().await?)
    }
}

// ============================================================================
// Identifier Scrubbing
// ============================================================================

/// Trims identifiers and drops junk values, preserving the order of the
/// survivors. Deduplication happens later in the batching engine.
fn scrub_identifiers(identifiers: &[String], extra_junk: &[&str]) -> Vec<String> {
    identifiers
        .iter()
        .map(|id| id.trim().to_string())
        .filter(|id| {
            let lower = id.to_lowercase();
            !JUNK_IDENTIFIERS.contains(&lower.as_str()) && !extra_junk.contains(&lower.as_str())
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_scrub_drops_junk_and_trims() {
        let input = ids(&[
            " WS-C3750X-48PF-S ",
            "",
            "n/a",
            "Unknown",
            "x",
            "C3KX-PWR-1100WAC",
        ]);
        let scrubbed = scrub_identifiers(&input, JUNK_PIDS);
        assert_eq!(scrubbed, ids(&["WS-C3750X-48PF-S", "C3KX-PWR-1100WAC"]));
    }

    #[test]
    fn test_scrub_keeps_pid_junk_for_serials() {
        // "x" and "b" are junk PIDs but plausible serial fragments; only
        // the shared junk list applies to serial numbers.
        let input = ids(&["x", "FTX1512AHK2", "n/a"]);
        let scrubbed = scrub_identifiers(&input, &[]);
        assert_eq!(scrubbed, ids(&["x", "FTX1512AHK2"]));
    }

    #[test]
    fn test_scrub_preserves_first_seen_order() {
        let input = ids(&["B-PID", "A-PID", "B-PID"]);
        // Duplicates survive scrubbing; the batching engine collapses them.
        assert_eq!(
            scrub_identifiers(&input, JUNK_PIDS),
            ids(&["B-PID", "A-PID", "B-PID"])
        );
    }

    #[test]
    fn test_parse_eox_envelope() {
        let json = r#"{
            "PaginationResponseRecord": {
                "PageIndex": 1,
                "LastIndex": 1,
                "TotalRecords": 1,
                "PageRecords": 1
            },
            "EOXRecord": [
                {
                    "EOLProductID": "WS-C3750X-48PF-S",
                    "LastDateOfSupport": {"value": "2021-10-31"}
                }
            ]
        }"#;

        let envelope: EoxResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.records.len(), 1);
        assert_eq!(
            envelope.records[0].get_str("EOLProductID"),
            Some("WS-C3750X-48PF-S")
        );
    }

    #[test]
    fn test_parse_eox_envelope_without_records() {
        // "Not found" style responses omit the EOXRecord key entirely.
        let envelope: EoxResponse =
            serde_json::from_str(r#"{"PaginationResponseRecord": {"LastIndex": 0}}"#).unwrap();
        assert!(envelope.records.is_empty());
    }

    #[test]
    fn test_parse_serial_info_envelope() {
        let json = r#"{
            "serial_numbers": [
                {"sr_no": "FTX1512AHK2", "is_covered": "YES"},
                {"sr_no": "FDO1541Z067", "is_covered": "NO"}
            ]
        }"#;

        let envelope: SerialInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.serial_numbers.len(), 2);
        assert_eq!(
            envelope.serial_numbers[0].get_str("sr_no"),
            Some("FTX1512AHK2")
        );
    }

    #[test]
    fn test_parse_serial_info_envelope_empty() {
        let envelope: SerialInfoResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.serial_numbers.is_empty());
    }
}
