//! Boundary traits between the simulation engine and its collaborators.
//!
//! The engine never prices anything and never computes an interest rate;
//! it consumes a [`Pricer`] and a [`RiskFreeRateProvider`] through the
//! narrow contracts defined here, and market data through
//! [`MarketDataSource`]. Anything satisfying these traits can drive a
//! backtest, which is also how the engine's tests substitute scripted
//! doubles for the Monte Carlo oracle.

use crate::types::error::{PricingError, RateError};
use crate::types::time::Date;

use crate::market_data::MarketObservation;

/// Result of one pricing-oracle call.
///
/// `deltas` and `delta_std_dev` have one entry per instrument, in the
/// same order as the spot vector the oracle was called with. The
/// simulator treats the contents as opaque apart from validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// Price estimate of the option.
    pub price: f64,
    /// One hedge ratio per underlying instrument, positionally aligned
    /// with the spot vector.
    pub deltas: Vec<f64>,
    /// Standard error of the price estimate.
    pub price_std_dev: f64,
    /// Standard error of each delta estimate.
    pub delta_std_dev: Vec<f64>,
}

impl PricingResult {
    /// Validates the result against the configured instrument count.
    ///
    /// An oracle that returns a misaligned delta vector, a non-finite
    /// price or delta, or a negative standard deviation has failed; the
    /// run aborts rather than book nonsense into the portfolio.
    ///
    /// # Errors
    /// `PricingError::InvalidResult` describing the first violation found.
    pub fn validate(&self, n_instruments: usize) -> Result<(), PricingError> {
        if self.deltas.len() != n_instruments {
            return Err(PricingError::InvalidResult(format!(
                "expected {} deltas, got {}",
                n_instruments,
                self.deltas.len()
            )));
        }
        if self.delta_std_dev.len() != n_instruments {
            return Err(PricingError::InvalidResult(format!(
                "expected {} delta standard deviations, got {}",
                n_instruments,
                self.delta_std_dev.len()
            )));
        }
        if !self.price.is_finite() {
            return Err(PricingError::InvalidResult(format!(
                "non-finite price: {}",
                self.price
            )));
        }
        if !self.price_std_dev.is_finite() || self.price_std_dev < 0.0 {
            return Err(PricingError::InvalidResult(format!(
                "invalid price standard deviation: {}",
                self.price_std_dev
            )));
        }
        if let Some(d) = self.deltas.iter().find(|d| !d.is_finite()) {
            return Err(PricingError::InvalidResult(format!(
                "non-finite delta: {}",
                d
            )));
        }
        if let Some(sd) = self
            .delta_std_dev
            .iter()
            .find(|sd| !sd.is_finite() || **sd < 0.0)
        {
            return Err(PricingError::InvalidResult(format!(
                "invalid delta standard deviation: {}",
                sd
            )));
        }
        Ok(())
    }
}

/// Pricing oracle.
///
/// Given a date and the spot vector in configured instrument order,
/// returns the option price, one delta per instrument, and standard
/// errors for both. Takes `&mut self` because concrete oracles own RNG
/// state; the contract still requires determinism for a fixed
/// configuration (identical `(date, spots)` sequences must produce
/// identical results across runs).
pub trait Pricer {
    /// Prices the option at `date` against `spots`.
    ///
    /// # Errors
    /// Any `PricingError` aborts the simulation; the engine performs no
    /// retry.
    fn price(&mut self, date: Date, spots: &[f64]) -> Result<PricingResult, PricingError>;
}

/// Risk-free rate provider.
///
/// Supplies the multiplicative growth factor applied to cash held over a
/// date interval.
pub trait RiskFreeRateProvider {
    /// Growth factor for cash held from `from` to `to`.
    ///
    /// Must be >= 0 and equal to 1.0 for a zero-length interval.
    ///
    /// # Errors
    /// Any `RateError` aborts the simulation.
    fn accrued_factor(&self, from: Date, to: Date) -> Result<f64, RateError>;
}

/// Source of the ordered market-observation sequence.
///
/// The simulator requires ascending unique dates and a fixed, consistent
/// instrument set across all observations; sources validate the latter,
/// the simulator enforces the former.
pub trait MarketDataSource {
    /// Source-specific error type (IO, parse, consistency).
    type Error: std::error::Error;

    /// Loads the full observation sequence.
    ///
    /// # Errors
    /// `Self::Error` if the source cannot be read or its data is
    /// inconsistent.
    fn observations(&self) -> Result<Vec<MarketObservation>, Self::Error>;
}
