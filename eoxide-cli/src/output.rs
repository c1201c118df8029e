//! Record rendering for the CLI.

use anyhow::Result;
use eoxide_core::Record;

use crate::{Cli, OutputFormat};

/// Prints a record list in the requested format.
pub fn print_records(records: &[Record], cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(records)?
            } else {
                serde_json::to_string(records)?
            };
            println!("{rendered}");
        }
        OutputFormat::Text => {
            for record in records {
                println!("{}", summary_line(record));
            }
            if !cli.quiet {
                println!("{} record(s)", records.len());
            }
        }
    }

    Ok(())
}

/// One-line summary of a record, keyed off the fields each endpoint is
/// known to return. Unrecognized records fall back to compact JSON.
fn summary_line(record: &Record) -> String {
    let field = |name: &str| record.display_value(name).unwrap_or("-").to_string();

    // EoX milestone record
    if record.get("EOLProductID").is_some() {
        return format!(
            "{:<24} end-of-sale {}  last-support {}",
            field("EOLProductID"),
            field("EndOfSaleDate"),
            field("LastDateOfSupport"),
        );
    }

    // SN2Info coverage summary
    if record.get("sr_no").is_some() {
        return format!(
            "{:<16} covered {}  coverage-end {}",
            field("sr_no"),
            field("is_covered"),
            field("coverage_end_date"),
        );
    }

    // Network element inventory row
    if record.get("hostname").is_some() || record.get("ipAddress").is_some() {
        return format!(
            "{:<24} {}  {}",
            field("hostname"),
            field("ipAddress"),
            field("productFamily"),
        );
    }

    // Hardware inventory row
    if record.get("productId").is_some() {
        return format!(
            "{:<24} {:<14} serial {}",
            field("productId"),
            field("hwType"),
            field("serialNumber"),
        );
    }

    serde_json::to_string(record).unwrap_or_else(|_| "<unprintable record>".to_string())
}

// ============================================================================
// Tests
// ============================================================================
