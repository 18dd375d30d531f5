//! Monte Carlo configuration errors.

use thiserror::Error;

/// Invalid Monte Carlo pricer configuration.
///
/// Detected at construction, before any observation is processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Sample count outside the valid range.
    #[error("invalid sample count: {0}")]
    InvalidSampleCount(usize),

    /// Option and model descriptions disagree on the number of
    /// underlyings.
    #[error("option has {option} underlyings but model has {model}")]
    DimensionMismatch {
        /// Underlyings in the option description
        option: usize,
        /// Volatilities in the model description
        model: usize,
    },

    /// The equicorrelation matrix is not positive semi-definite for this
    /// basket size.
    #[error("correlation {rho} is not admissible for {n} underlyings")]
    InvalidCorrelation {
        /// The configured pairwise correlation
        rho: f64,
        /// Number of underlyings
        n: usize,
    },

    /// A required parameter was not supplied to the builder.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
}
