// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Eoxide CLI - query Cisco's Support and Service APIs from the command line.
//!
//! # Examples
//!
//! ```bash
//! # EoX records for two product IDs
//! eoxide eox WS-C3750X-48PF-S C3KX-PWR-1100WAC
//!
//! # Coverage summary for serial numbers, as JSON
//! eoxide serial FTX1512AHK2 FDO1541Z067 --format json --pretty
//!
//! # Hardware inventory for one customer
//! eoxide hardware --customer-id 123456 --hw-type Chassis
//!
//! # Network elements for one customer
//! eoxide network-elements --customer-id 123456
//! ```
//!
//! Credentials come from `--client-key`/`--client-secret` or the
//! `CISCO_CLIENT_KEY`/`CISCO_CLIENT_SECRET` environment variables.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{eox, inventory, serial};

// ============================================================================
// CLI Definition
// ============================================================================

/// Eoxide CLI - Cisco Support and Service API queries.
#[derive(Parser)]
#[command(name = "eoxide")]
#[command(about = "Query Cisco EoX, SN2Info and inventory APIs")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// API client key.
    #[arg(long, env = "CISCO_CLIENT_KEY", global = true)]
    pub client_key: Option<String>,

    /// API client secret.
    #[arg(long, env = "CISCO_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Query EoX records by product ID.
    #[command(visible_alias = "e")]
    Eox(eox::EoxArgs),

    /// Query coverage summaries by serial number.
    #[command(visible_alias = "s")]
    Serial(serial::SerialArgs),

    /// Query a customer's hardware inventory.
    Hardware(inventory::HardwareArgs),

    /// Query a customer's network-element inventory.
    NetworkElements(inventory::NetworkElementsArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Authentication failed.
    AuthFailed = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("eoxide=debug,info")
    } else {
        EnvFilter::new("eoxide=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Eox(args) => eox::run(args, &cli).await,
        Commands::Serial(args) => serial::run(args, &cli).await,
        Commands::Hardware(args) => inventory::run_hardware(args, &cli).await,
        Commands::NetworkElements(args) => inventory::run_network_elements(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        let code = if e.downcast_ref::<eoxide_fetch::AuthError>().is_some() {
            ExitCode::AuthFailed
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}
