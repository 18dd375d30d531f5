//! CLI configuration management.
//!
//! Operational defaults (log level, output formatting) come from an
//! optional TOML file with environment variable overrides; everything
//! describing the backtest itself lives in the JSON parameter file
//! handled by `adapter_loader`.

use serde::Deserialize;
use std::path::Path;

use crate::error::{CliError, Result};

/// Operational CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print the output JSON.
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pretty_output() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty_output: default_pretty_output(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// `CliError::Io` if the file cannot be read; an IO error wrapping
    /// the TOML parse failure if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid config file {}: {}", path.display(), e),
            ))
        })
    }

    /// Loads from `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Applies environment variable overrides.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(level) = std::env::var("HEDGER_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Ok(pretty) = std::env::var("HEDGER_PRETTY_OUTPUT") {
            if let Ok(value) = pretty.parse() {
                self.pretty_output = value;
            }
        }
        self
    }
}
