//! `hardware` and `network-elements` commands - customer inventory.

use anyhow::Result;
use eoxide_endpoints::InventoryClient;

use crate::{Cli, output};

/// Arguments for the hardware command.
#[derive(clap::Args)]
pub struct HardwareArgs {
    /// Unique identifier of the Cisco customer.
    #[arg(long)]
    pub customer_id: String,

    /// Name of the inventory.
    #[arg(long)]
    pub inventory_name: Option<String>,

    /// Physical hardware type (Chassis, Module, Fan, Power Supply, Other).
    #[arg(long)]
    pub hw_type: Option<String>,
}

/// Arguments for the network-elements command.
#[derive(clap::Args)]
pub struct NetworkElementsArgs {
    /// Unique identifier of the Cisco customer.
    #[arg(long)]
    pub customer_id: String,

    /// Name of the inventory.
    #[arg(long)]
    pub inventory_name: Option<String>,
}

/// Runs the hardware command.
pub async fn run_hardware(args: &HardwareArgs, cli: &Cli) -> Result<()> {
    let ctx = super::build_context(cli).await?;
    let inventory = InventoryClient::new(ctx);

    let records = inventory
        .query_hardware_inventory(
            &args.customer_id,
            args.inventory_name.as_deref(),
            args.hw_type.as_deref(),
        )
        .await?;
    output::print_records(&records, cli)
}

/// Runs the network-elements command.
pub async fn run_network_elements(args: &NetworkElementsArgs, cli: &Cli) -> Result<()> {
    let ctx = super::build_context(cli).await?;
    let inventory = InventoryClient::new(ctx);

    let records = inventory
        .query_network_elements_inventory(&args.customer_id, args.inventory_name.as_deref())
        .await?;
    output::print_records(&records, cli)
}
