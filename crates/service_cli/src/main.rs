//! Hedger CLI - Command Line Operations for the Hedging Backtest
//!
//! This is the operational entry point for the hedging backtest
//! workspace.
//!
//! # Commands
//!
//! - `hedger backtest --params <json> --market-data <csv> --output <json>`
//!   runs the hedging simulation over a historical series
//! - `hedger check --params <json> --market-data <csv>` validates inputs
//!
//! # Architecture
//!
//! As the service layer of the workspace, this binary orchestrates the
//! adapter, pricing, and engine layers behind a single command-line
//! interface.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::{commands, CliConfig};

/// Hedging backtest CLI
#[derive(Parser)]
#[command(name = "hedger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "hedger.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the hedging simulation over a historical series
    Backtest {
        /// Path to the JSON parameter file
        #[arg(short, long)]
        params: String,

        /// Path to the CSV market-data file
        #[arg(short, long)]
        market_data: String,

        /// Path for the JSON output file
        #[arg(short, long)]
        output: String,
    },

    /// Validate parameter and market-data files without running
    Check {
        /// Path to the JSON parameter file
        #[arg(short, long)]
        params: String,

        /// Path to the CSV market-data file
        #[arg(short, long)]
        market_data: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_or_default(Path::new(&cli.config)).with_env_override();

    // RUST_LOG wins; otherwise the config file's level, or debug with -v
    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Backtest {
            params,
            market_data,
            output,
        } => commands::backtest::run(&params, &market_data, &output, config.pretty_output)?,
        Commands::Check {
            params,
            market_data,
        } => commands::check::run(&params, &market_data)?,
    }

    Ok(())
}
