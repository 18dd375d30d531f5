//! Loader error types.

use thiserror::Error;

/// Market-data loading errors.
#[derive(Error, Debug)]
pub enum DataError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV record could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date field could not be parsed.
    #[error(transparent)]
    Date(#[from] hedger_core::types::DateError),

    /// A price field was not a positive finite number.
    #[error("invalid price {price} for {symbol} on {date}")]
    InvalidPrice {
        /// Instrument symbol
        symbol: String,
        /// Observation date (as read from the file)
        date: String,
        /// The offending price
        price: f64,
    },

    /// The file contained no rows.
    #[error("market data file is empty")]
    Empty,

    /// An observation's instrument set differs from the first one.
    #[error(transparent)]
    Inconsistent(#[from] hedger_core::types::MarketDataError),
}

/// Backtest-parameter errors.
///
/// Detected at load time, before any observation is processed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, including an unrecognised rebalancing-policy
    /// variant.
    #[error("parameter parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Weekday string not recognised.
    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),

    /// Periodic policy with a zero period.
    #[error("rebalancing period must be at least one day")]
    InvalidPeriod,

    /// Per-instrument lists disagree in length.
    #[error("{symbols} symbols but {weights} weights and {volatilities} volatilities")]
    MismatchedLengths {
        /// Number of underlying symbols
        symbols: usize,
        /// Number of basket weights
        weights: usize,
        /// Number of model volatilities
        volatilities: usize,
    },

    /// Monte Carlo sample count of zero.
    #[error("monte carlo sample count must be positive")]
    InvalidSampleCount,
}
