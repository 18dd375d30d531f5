//! Monte Carlo pricing engine.
//!
//! The orchestration layer for basket-option pricing:
//! 1. Per-call seed derivation (reproducible streams per pricing date)
//! 2. Correlated terminal-value sampling (Cholesky of the
//!    equicorrelation matrix, log-space exact GBM step)
//! 3. Payoff and pathwise-delta accumulation
//! 4. Discounting and standard-error aggregation

mod cholesky;
mod config;
mod error;
mod pricer;

pub use cholesky::{cholesky, equicorrelation_matrix};
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_SAMPLES};
pub use error::ConfigError;
pub use pricer::MonteCarloBasketPricer;
