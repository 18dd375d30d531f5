//! Simulation error type.

use hedger_core::types::{Date, MarketDataError, PricingError, RateError};
use thiserror::Error;

/// Errors raised by the hedging simulator.
///
/// Three kinds, all fatal to the current run:
/// - precondition violations (`EmptyMarketData`, `NonChronological`,
///   `QuantityCountMismatch`, `MarketData`), raised before any state
///   mutation for the offending step;
/// - oracle failures (`Pricing`, `Rate`), propagated unmodified from the
///   collaborators with no retry;
/// - whether partially produced output is usable is the caller's policy,
///   not the engine's — the engine simply returns the error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The observation sequence was empty.
    #[error("market data contains no observations")]
    EmptyMarketData,

    /// Observation dates must be strictly ascending.
    #[error("observation {index} ({date}) is not after the previous observation")]
    NonChronological {
        /// Index of the offending observation
        index: usize,
        /// Date of the offending observation
        date: Date,
    },

    /// A quantity vector of the wrong length was applied to the portfolio.
    #[error("expected {expected} quantities, got {actual}")]
    QuantityCountMismatch {
        /// Number of instruments in the portfolio
        expected: usize,
        /// Length of the supplied quantity vector
        actual: usize,
    },

    /// An observation was malformed (missing or inconsistent instruments).
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// The pricing oracle failed or returned an invalid result.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The rate provider failed or returned an invalid factor.
    #[error(transparent)]
    Rate(#[from] RateError),
}
