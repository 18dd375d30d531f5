//! Core time and error types.
//!
//! This module provides:
//! - `time`: The `Date` type and calendar-day arithmetic for the daily
//!   historical series the backtest walks
//! - `error`: Structured error types for dates, pricing, rates, and
//!   market data
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`year_fraction_act365`] from `time`
//! - [`DateError`], [`PricingError`], [`RateError`], [`MarketDataError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, MarketDataError, PricingError, RateError};
pub use time::{year_fraction_act365, Date};
