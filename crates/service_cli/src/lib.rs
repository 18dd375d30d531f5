//! # service_cli: Command-Line Operations for the Hedging Backtest
//!
//! The operational entry point of the workspace: loads parameters and
//! market data through `adapter_loader`, assembles the Monte Carlo
//! oracle and rate provider from `hedger_pricing`, drives the
//! `hedger_engine` simulator, and writes the snapshot series as JSON.
//!
//! # Commands
//!
//! - `hedger backtest --params <json> --market-data <csv> --output <json>`
//!   runs the full simulation
//! - `hedger check --params <json> --market-data <csv>` validates the
//!   inputs without pricing anything

pub mod commands;
pub mod config;
pub mod error;

pub use config::CliConfig;
pub use error::{CliError, Result};
