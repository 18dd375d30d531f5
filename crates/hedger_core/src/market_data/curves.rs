//! Rate curves.
//!
//! Cash held between rebalances grows at the risk-free rate; the curve
//! types here supply the discount and capitalisation factors that
//! accrual is built from.

use crate::types::error::RateError;
use num_traits::Float;

/// Generic rate curve trait for discount and capitalisation factors.
///
/// Implementations are generic over `T: Float` so they can be used with
/// `f64` or any other floating-point scalar.
///
/// # Invariants
///
/// - D(0) = 1 (discount factor at time 0 is 1)
/// - D(t) > 0 for all t >= 0
/// - C(t) = 1 / D(t) (capitalisation is the reciprocal of discounting)
///
/// # Example
///
/// ```
/// use hedger_core::market_data::curves::{FlatRateCurve, RateCurve};
///
/// let curve = FlatRateCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// // Capitalisation over the same horizon undoes the discounting
/// let cf = curve.capitalisation_factor(1.0).unwrap();
/// assert!((df * cf - 1.0).abs() < 1e-12);
/// ```
pub trait RateCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// # Errors
    /// Returns `RateError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, RateError>;

    /// Return the capitalisation (growth) factor for horizon `t`.
    ///
    /// Default implementation is the reciprocal of the discount factor.
    ///
    /// # Errors
    /// Returns `RateError::InvalidMaturity` if `t < 0`.
    fn capitalisation_factor(&self, t: T) -> Result<T, RateError> {
        Ok(T::one() / self.discount_factor(t)?)
    }
}

/// Flat rate curve with a constant continuously-compounded rate.
///
/// The same rate applies to all horizons. This is the term structure the
/// backtest uses: cash accrues at `exp(r * t)` between rebalances.
///
/// # Example
///
/// ```
/// use hedger_core::market_data::curves::{FlatRateCurve, RateCurve};
///
/// let curve = FlatRateCurve::new(0.03_f64);
/// assert_eq!(curve.rate(), 0.03);
/// assert_eq!(curve.capitalisation_factor(0.0).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRateCurve<T: Float> {
    /// The constant interest rate
    rate: T,
}

impl<T: Float> FlatRateCurve<T> {
    /// Construct a flat curve with the given constant rate
    /// (continuously compounded).
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> RateCurve<T> for FlatRateCurve<T> {
    /// Return the discount factor for maturity `t`.
    ///
    /// For a flat curve with rate r:
    /// ```text
    /// D(t) = exp(-r * t)
    /// ```
    fn discount_factor(&self, t: T) -> Result<T, RateError> {
        if t < T::zero() {
            return Err(RateError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_known_value() {
        let curve = FlatRateCurve::new(0.05_f64);
        assert_relative_eq!(
            curve.discount_factor(1.0).unwrap(),
            (-0.05f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_discount_factor_at_zero_is_one() {
        let curve = FlatRateCurve::new(0.05_f64);
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor_rejects_negative_maturity() {
        let curve = FlatRateCurve::new(0.05_f64);
        assert_eq!(
            curve.discount_factor(-1.0).unwrap_err(),
            RateError::InvalidMaturity { t: -1.0 }
        );
    }

    #[test]
    fn test_capitalisation_is_reciprocal_of_discounting() {
        let curve = FlatRateCurve::new(0.04_f64);
        for t in [0.0, 0.5, 1.0, 7.0 / 365.0] {
            let df = curve.discount_factor(t).unwrap();
            let cf = curve.capitalisation_factor(t).unwrap();
            assert_relative_eq!(df * cf, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_zero_rate_curve_never_accrues() {
        let curve = FlatRateCurve::new(0.0_f64);
        assert_eq!(curve.capitalisation_factor(3.0).unwrap(), 1.0);
    }

    #[test]
    fn test_negative_rate_discount_above_one() {
        // Negative rates are valid; discounting then exceeds 1
        let curve = FlatRateCurve::new(-0.01_f64);
        assert!(curve.discount_factor(1.0).unwrap() > 1.0);
        assert!(curve.capitalisation_factor(1.0).unwrap() < 1.0);
    }
}
