//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `PricingError`: Errors from the pricing oracle
//! - `RateError`: Errors from rate accrual and curves
//! - `MarketDataError`: Errors from market observations
//!
//! All are fatal to the current run; the simulation layer wraps them and
//! the operator sees them via the CLI error path. No retries anywhere.

use thiserror::Error;

use super::time::Date;

/// Date-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("date parse error: {0}")]
    ParseError(String),
}

/// Pricing oracle errors.
///
/// Any failure from the pricer aborts the whole run; the simulator
/// performs no retry and no partial recovery.
///
/// # Examples
/// ```
/// use hedger_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot price".to_string());
/// assert_eq!(format!("{}", err), "invalid input: negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Pricing requested for a date the oracle does not support
    /// (e.g., on or after option maturity).
    #[error("unsupported pricing date: {0}")]
    UnsupportedDate(Date),

    /// Numerical instability during computation.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),

    /// The oracle produced an invalid result (non-finite price or delta,
    /// negative standard deviation).
    #[error("invalid pricing result: {0}")]
    InvalidResult(String),
}

/// Rate accrual and curve errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// Accrual requested over a reversed interval.
    #[error("reversed accrual interval: {from} to {to}")]
    ReversedInterval {
        /// Interval start
        from: Date,
        /// Interval end
        to: Date,
    },

    /// Negative maturity passed to a curve.
    #[error("invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The offending maturity in years
        t: f64,
    },

    /// The provider produced an invalid factor (negative or non-finite).
    #[error("invalid accrual factor: {factor}")]
    InvalidFactor {
        /// The offending factor
        factor: f64,
    },
}

/// Market observation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// An observation has no price for a configured instrument.
    #[error("no price for instrument {symbol} on {date}")]
    MissingInstrument {
        /// The instrument symbol
        symbol: String,
        /// The observation date
        date: Date,
    },

    /// An observation's instrument set differs from the configured set.
    #[error("instrument set on {date} does not match the configured instruments")]
    InconsistentInstruments {
        /// The observation date
        date: Date,
    },
}
