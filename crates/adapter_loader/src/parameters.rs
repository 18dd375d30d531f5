//! JSON backtest parameters.
//!
//! One document describes a whole run: the basket option, the market
//! model behind the pricing oracle, Monte Carlo settings, and the
//! rebalancing policy. Field names are camelCase, policy variants are
//! tag-dispatched on `type`:
//!
//! ```json
//! {
//!   "basketOption": {
//!     "underlyingSymbols": ["AAPL", "MSFT"],
//!     "weights": [0.5, 0.5],
//!     "strike": 250.0,
//!     "maturity": "2025-01-01"
//!   },
//!   "model": { "riskFreeRate": 0.03, "volatilities": [0.2, 0.25], "correlation": 0.3 },
//!   "monteCarlo": { "nSamples": 50000, "seed": 42 },
//!   "rebalancing": { "type": "weekly", "weekday": "wednesday" }
//! }
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::Weekday;
use hedger_core::types::Date;
use hedger_engine::RebalancingPolicy;
use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// Basket option description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketOptionParams {
    /// Underlying symbols; fixes the instrument order used everywhere
    /// downstream (spot vectors, deltas, portfolio composition).
    pub underlying_symbols: Vec<String>,
    /// Basket weights, aligned with `underlying_symbols`.
    pub weights: Vec<f64>,
    /// Strike level.
    pub strike: f64,
    /// Maturity date.
    pub maturity: Date,
}

/// Market model parameters for the pricing oracle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParams {
    /// Continuously-compounded risk-free rate, shared by pricing and
    /// cash accrual.
    pub risk_free_rate: f64,
    /// Per-underlying volatilities, aligned with the symbols.
    pub volatilities: Vec<f64>,
    /// Single pairwise correlation shared by every pair.
    pub correlation: f64,
}

/// Monte Carlo settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloParams {
    /// Samples per pricing call.
    pub n_samples: usize,
    /// Base seed; defaults to 0 for reproducible runs out of the box.
    #[serde(default)]
    pub seed: u64,
}

/// Rebalancing-policy description as written in the parameter file.
///
/// Tag dispatch is closed: a document with any other `type` is a
/// configuration error at deserialisation time.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RebalancingDescription {
    /// Rebalance every `periodDays` whole calendar days.
    #[serde(rename_all = "camelCase")]
    Periodic {
        /// Minimum elapsed whole days between rebalances.
        period_days: u32,
    },
    /// Rebalance on every observation falling on `weekday`.
    #[serde(rename_all = "camelCase")]
    Weekly {
        /// Target weekday name (e.g. "wednesday" or "wed").
        weekday: String,
    },
}

impl RebalancingDescription {
    /// Converts the description into the engine policy.
    ///
    /// # Errors
    /// `ConfigError::InvalidPeriod` for a zero period,
    /// `ConfigError::UnknownWeekday` for an unparseable weekday name.
    pub fn to_policy(&self) -> Result<RebalancingPolicy, ConfigError> {
        match self {
            RebalancingDescription::Periodic { period_days } => {
                if *period_days == 0 {
                    return Err(ConfigError::InvalidPeriod);
                }
                Ok(RebalancingPolicy::Periodic {
                    period_days: *period_days,
                })
            }
            RebalancingDescription::Weekly { weekday } => {
                let weekday = Weekday::from_str(weekday)
                    .map_err(|_| ConfigError::UnknownWeekday(weekday.clone()))?;
                Ok(RebalancingPolicy::Weekly { weekday })
            }
        }
    }
}

/// Full backtest parameter set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestParameters {
    /// The hedged basket option.
    pub basket_option: BasketOptionParams,
    /// Market model for the pricing oracle and cash accrual.
    pub model: ModelParams,
    /// Monte Carlo settings.
    pub monte_carlo: MonteCarloParams,
    /// Rebalancing-policy selection.
    pub rebalancing: RebalancingDescription,
}

impl BacktestParameters {
    /// Parses and validates parameters from a JSON string.
    ///
    /// # Errors
    /// `ConfigError` on malformed JSON or inconsistent contents.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: BacktestParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads and validates parameters from a JSON file.
    ///
    /// # Errors
    /// `ConfigError` on IO, parse, or validation failure.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let params = Self::from_json(&fs::read_to_string(path.as_ref())?)?;
        info!(
            instruments = params.basket_option.underlying_symbols.len(),
            samples = params.monte_carlo.n_samples,
            "parameters loaded"
        );
        Ok(params)
    }

    /// Cross-field validation: per-instrument lists must agree in
    /// length, the sample count must be positive, and the policy must
    /// convert cleanly.
    ///
    /// # Errors
    /// The first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = self.basket_option.underlying_symbols.len();
        let weights = self.basket_option.weights.len();
        let volatilities = self.model.volatilities.len();
        if symbols != weights || symbols != volatilities {
            return Err(ConfigError::MismatchedLengths {
                symbols,
                weights,
                volatilities,
            });
        }
        if self.monte_carlo.n_samples == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        self.rebalancing.to_policy().map(|_| ())
    }
}
