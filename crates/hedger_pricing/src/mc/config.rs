//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of samples allowed per pricing call.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Immutable Monte Carlo configuration.
///
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use hedger_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_samples(50_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 50_000);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_samples: usize,
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Number of Monte Carlo samples per pricing call.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Base seed; each pricing call derives its stream from this and the
    /// pricing date.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidSampleCount` if `n_samples` is 0 or greater
    /// than [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_samples == 0 || self.n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_samples));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of samples per pricing call.
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// `ConfigError::MissingParameter` if `n_samples` was not set,
    /// `ConfigError::InvalidSampleCount` if it is out of range. The seed
    /// defaults to 0.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_samples = self
            .n_samples
            .ok_or(ConfigError::MissingParameter("n_samples"))?;
        let config = MonteCarloConfig {
            n_samples,
            seed: self.seed.unwrap_or(0),
        };
        config.validate()?;
        Ok(config)
    }
}
