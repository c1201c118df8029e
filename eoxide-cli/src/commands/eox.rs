//! `eox` command - EoX records by product ID.

use anyhow::Result;
use eoxide_endpoints::SupportClient;

use crate::{Cli, output};

/// Arguments for the eox command.
#[derive(clap::Args)]
pub struct EoxArgs {
    /// Product IDs to query (e.g. WS-C3750X-48PF-S).
    #[arg(required = true)]
    pub pids: Vec<String>,
}

/// Runs the eox command.
pub async fn run(args: &EoxArgs, cli: &Cli) -> Result<()> {
    let ctx = super::build_context(cli).await?;
    let support = SupportClient::new(ctx);

    let records = support.query_by_pid(&args.pids).await?;
    output::print_records(&records, cli)
}
