//! CLI error type.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the operator.
///
/// Every failure class of a run ends up here: configuration problems,
/// malformed inputs, oracle failures, and simulation precondition
/// violations. All are fatal; nothing is retried.
#[derive(Error, Debug)]
pub enum CliError {
    /// An input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Parameter file could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(#[from] adapter_loader::ConfigError),

    /// Market data could not be loaded.
    #[error("market data error: {0}")]
    Data(#[from] adapter_loader::DataError),

    /// Option or model description rejected by the pricing layer.
    #[error("pricing setup error: {0}")]
    Pricing(#[from] hedger_core::types::PricingError),

    /// Monte Carlo configuration rejected.
    #[error("monte carlo configuration error: {0}")]
    MonteCarlo(#[from] hedger_pricing::mc::ConfigError),

    /// The simulation aborted.
    #[error("simulation error: {0}")]
    Simulation(#[from] hedger_engine::SimulationError),

    /// Output could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialised.
    #[error("serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}
