//! # adapter_loader: Batch Input Adapters
//!
//! File-based inputs for the hedging backtest:
//!
//! - `market_data`: long-format CSV (one row per instrument per date)
//!   grouped into per-date [`MarketObservation`]s
//! - `parameters`: JSON backtest parameters (basket option, market
//!   model, Monte Carlo settings, rebalancing policy)
//!
//! Both loaders validate shape at the boundary so the simulation layers
//! only ever see well-formed inputs; an unrecognised rebalancing-policy
//! variant or an inconsistent instrument set is rejected here, before
//! any observation is processed.
//!
//! [`MarketObservation`]: hedger_core::market_data::MarketObservation

pub mod error;
pub mod market_data;
pub mod parameters;

pub use error::{ConfigError, DataError};
pub use market_data::CsvMarketDataSource;
pub use parameters::BacktestParameters;
