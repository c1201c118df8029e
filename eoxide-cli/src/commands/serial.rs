//! `serial` command - coverage summaries by serial number.

use anyhow::Result;
use eoxide_endpoints::SupportClient;

use crate::{Cli, output};

/// Arguments for the serial command.
#[derive(clap::Args)]
pub struct SerialArgs {
    /// Serial numbers to query (e.g. FTX1512AHK2).
    #[arg(required = true)]
    pub serials: Vec<String>,
}

/// Runs the serial command.
pub async fn run(args: &SerialArgs, cli: &Cli) -> Result<()> {
    let ctx = super::build_context(cli).await?;
    let support = SupportClient::new(ctx);

    let records = support.query_by_serial(&args.serials).await?;
    output::print_records(&records, cli)
}
