//! Basket option and market model descriptions.

use hedger_core::types::{Date, PricingError};

/// European call on a weighted basket of underlyings.
///
/// Payoff at maturity: `max(sum_i w_i * S_i(T) - K, 0)`. Weights are
/// positionally aligned with the configured instrument order.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketOption {
    weights: Vec<f64>,
    strike: f64,
    maturity: Date,
}

impl BasketOption {
    /// Creates a basket option description.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if there are no weights, any weight
    /// is non-finite or negative, or the strike is non-finite or
    /// negative.
    pub fn new(weights: Vec<f64>, strike: f64, maturity: Date) -> Result<Self, PricingError> {
        if weights.is_empty() {
            return Err(PricingError::InvalidInput(
                "basket needs at least one weight".to_string(),
            ));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "invalid basket weight: {}",
                w
            )));
        }
        if !strike.is_finite() || strike < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "invalid strike: {}",
                strike
            )));
        }
        Ok(Self {
            weights,
            strike,
            maturity,
        })
    }

    /// Basket weights in instrument order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Strike level.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Maturity date.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Number of underlyings.
    pub fn n_underlyings(&self) -> usize {
        self.weights.len()
    }
}

/// Multi-asset geometric Brownian motion market model.
///
/// Constant continuously-compounded rate, one volatility per underlying,
/// and a single pairwise correlation shared by every pair
/// (equicorrelation).
#[derive(Debug, Clone, PartialEq)]
pub struct GbmMarketModel {
    rate: f64,
    volatilities: Vec<f64>,
    correlation: f64,
}

impl GbmMarketModel {
    /// Creates a market model description.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if the rate is non-finite, any
    /// volatility is negative or non-finite, or the correlation lies
    /// outside `[-1, 1]`. Whether the equicorrelation matrix is positive
    /// semi-definite for the basket size is checked when the pricer is
    /// constructed.
    pub fn new(
        rate: f64,
        volatilities: Vec<f64>,
        correlation: f64,
    ) -> Result<Self, PricingError> {
        if !rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "invalid rate: {}",
                rate
            )));
        }
        if volatilities.is_empty() {
            return Err(PricingError::InvalidInput(
                "model needs at least one volatility".to_string(),
            ));
        }
        if let Some(vol) = volatilities.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "invalid volatility: {}",
                vol
            )));
        }
        if !(-1.0..=1.0).contains(&correlation) {
            return Err(PricingError::InvalidInput(format!(
                "correlation {} outside [-1, 1]",
                correlation
            )));
        }
        Ok(Self {
            rate,
            volatilities,
            correlation,
        })
    }

    /// Risk-free rate (continuously compounded).
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatilities in instrument order.
    pub fn volatilities(&self) -> &[f64] {
        &self.volatilities
    }

    /// Shared pairwise correlation.
    pub fn correlation(&self) -> f64 {
        self.correlation
    }
}
