//! Backtest command implementation
//!
//! Wires the loaders, the Monte Carlo oracle, and the simulation engine
//! together, then serialises the snapshot series to a JSON file.

use std::fs;
use std::path::Path;

use adapter_loader::{BacktestParameters, CsvMarketDataSource};
use hedger_core::traits::MarketDataSource;
use hedger_engine::{HedgingSimulator, OutputRecord};
use hedger_pricing::mc::{MonteCarloBasketPricer, MonteCarloConfig};
use hedger_pricing::{BasketOption, ConstantRateProvider, GbmMarketModel};
use tracing::info;

use crate::error::{CliError, Result};

/// Run the backtest command.
///
/// Loads parameters and market data, runs the hedging simulation, and
/// writes the output records to `output_path`.
pub fn run(
    params_path: &str,
    market_data_path: &str,
    output_path: &str,
    pretty: bool,
) -> Result<()> {
    let records = simulate(params_path, market_data_path)?;

    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    fs::write(output_path, &json)?;

    info!(
        path = %output_path,
        records = records.len(),
        size = json.len(),
        "output written"
    );
    println!("Output written to {}", output_path);
    Ok(())
}

/// Loads inputs and runs the simulation, returning the record series.
pub fn simulate(params_path: &str, market_data_path: &str) -> Result<Vec<OutputRecord>> {
    for path in [params_path, market_data_path] {
        if !Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
    }

    let params = BacktestParameters::from_path(params_path)?;
    let observations = CsvMarketDataSource::new(market_data_path).observations()?;

    let policy = params.rebalancing.to_policy()?;
    let option = BasketOption::new(
        params.basket_option.weights.clone(),
        params.basket_option.strike,
        params.basket_option.maturity,
    )?;
    let model = GbmMarketModel::new(
        params.model.risk_free_rate,
        params.model.volatilities.clone(),
        params.model.correlation,
    )?;
    let config = MonteCarloConfig::builder()
        .n_samples(params.monte_carlo.n_samples)
        .seed(params.monte_carlo.seed)
        .build()?;

    let pricer = MonteCarloBasketPricer::new(option, model, config)?;
    let rates = ConstantRateProvider::new(params.model.risk_free_rate);

    info!(
        instruments = params.basket_option.underlying_symbols.len(),
        observations = observations.len(),
        "starting backtest"
    );

    let mut simulator = HedgingSimulator::new(
        pricer,
        rates,
        params.basket_option.underlying_symbols,
        policy,
    );
    Ok(simulator.run(&observations)?)
}
