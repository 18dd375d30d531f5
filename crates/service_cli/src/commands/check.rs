//! Check command implementation
//!
//! Validates the parameter and market-data files without pricing
//! anything: configuration errors and malformed inputs surface here, so
//! long runs never die on a typo.

use std::path::Path;

use adapter_loader::{BacktestParameters, CsvMarketDataSource};
use hedger_core::traits::MarketDataSource;
use tracing::info;

use crate::error::{CliError, Result};

/// Run the check command.
pub fn run(params_path: &str, market_data_path: &str) -> Result<()> {
    for path in [params_path, market_data_path] {
        if !Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
    }

    let params = BacktestParameters::from_path(params_path)?;
    let policy = params.rebalancing.to_policy()?;
    let observations = CsvMarketDataSource::new(market_data_path).observations()?;

    // Every configured symbol must be quoted on every date
    for observation in &observations {
        observation
            .spot_vector(&params.basket_option.underlying_symbols)
            .map_err(adapter_loader::DataError::Inconsistent)?;
    }

    info!(
        instruments = params.basket_option.underlying_symbols.len(),
        observations = observations.len(),
        "inputs valid"
    );
    println!(
        "OK: {} instruments, {} observations from {} to {}, policy {:?}",
        params.basket_option.underlying_symbols.len(),
        observations.len(),
        observations[0].date(),
        observations[observations.len() - 1].date(),
        policy,
    );
    Ok(())
}
