//! Risk-free rate provider.

use hedger_core::market_data::curves::{FlatRateCurve, RateCurve};
use hedger_core::traits::RiskFreeRateProvider;
use hedger_core::types::{year_fraction_act365, Date, RateError};

/// Constant-rate accrual provider.
///
/// Cash held over `[from, to]` grows by `exp(r * tau)` with `tau` the
/// ACT/365 year fraction — the reciprocal of the flat curve's discount
/// factor over the same horizon. A zero-length interval accrues nothing
/// (factor 1.0).
///
/// # Examples
///
/// ```
/// use hedger_core::traits::RiskFreeRateProvider;
/// use hedger_core::types::Date;
/// use hedger_pricing::ConstantRateProvider;
///
/// let provider = ConstantRateProvider::new(0.05);
/// let from = Date::from_ymd(2024, 1, 1).unwrap();
///
/// assert_eq!(provider.accrued_factor(from, from).unwrap(), 1.0);
/// assert!(provider.accrued_factor(from, from.plus_days(7)).unwrap() > 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRateProvider {
    curve: FlatRateCurve<f64>,
}

impl ConstantRateProvider {
    /// Creates a provider with the given continuously-compounded rate.
    pub fn new(rate: f64) -> Self {
        Self {
            curve: FlatRateCurve::new(rate),
        }
    }

    /// The constant rate.
    pub fn rate(&self) -> f64 {
        self.curve.rate()
    }
}

impl RiskFreeRateProvider for ConstantRateProvider {
    fn accrued_factor(&self, from: Date, to: Date) -> Result<f64, RateError> {
        if to < from {
            return Err(RateError::ReversedInterval { from, to });
        }
        self.curve
            .capitalisation_factor(year_fraction_act365(from, to))
    }
}
