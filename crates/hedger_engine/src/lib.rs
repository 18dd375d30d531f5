//! # hedger_engine: Hedging Simulation Engine
//!
//! The kernel of the workspace: replays an ordered historical series of
//! market observations through a delta-hedging strategy and emits one
//! portfolio snapshot per hedging event.
//!
//! # Components
//!
//! - [`Portfolio`]: cash plus a fixed-key position map, mutated in place
//! - [`RebalancingPolicy`] / [`RebalancingManager`]: the decision of
//!   whether to rebalance on a given date
//! - [`HedgingSimulator`]: the time-stepping loop, accounting rules, and
//!   snapshot emission
//! - [`OutputRecord`]: the immutable per-event snapshot
//!
//! # Data flow
//!
//! Strictly forward in time: ordered observations → pricing-oracle calls
//! → portfolio mutation → snapshot emission. The engine depends only on
//! the boundary traits in `hedger_core`; any `Pricer` and
//! `RiskFreeRateProvider` implementation can drive a backtest.
//!
//! # Example
//!
//! ```
//! use hedger_core::market_data::MarketObservation;
//! use hedger_core::traits::{Pricer, PricingResult, RiskFreeRateProvider};
//! use hedger_core::types::{Date, PricingError, RateError};
//! use hedger_engine::{HedgingSimulator, RebalancingPolicy};
//!
//! // A scripted oracle: constant price and deltas
//! struct FlatPricer;
//! impl Pricer for FlatPricer {
//!     fn price(&mut self, _: Date, spots: &[f64]) -> Result<PricingResult, PricingError> {
//!         Ok(PricingResult {
//!             price: 10.0,
//!             deltas: vec![0.5; spots.len()],
//!             price_std_dev: 0.0,
//!             delta_std_dev: vec![0.0; spots.len()],
//!         })
//!     }
//! }
//!
//! struct NoRates;
//! impl RiskFreeRateProvider for NoRates {
//!     fn accrued_factor(&self, _: Date, _: Date) -> Result<f64, RateError> {
//!         Ok(1.0)
//!     }
//! }
//!
//! let observations: Vec<MarketObservation> = (1..=10)
//!     .map(|day| {
//!         MarketObservation::new(
//!             Date::from_ymd(2024, 1, day).unwrap(),
//!             vec![("A".to_string(), 100.0)],
//!         )
//!     })
//!     .collect();
//!
//! let mut simulator = HedgingSimulator::new(
//!     FlatPricer,
//!     NoRates,
//!     vec!["A".to_string()],
//!     RebalancingPolicy::Periodic { period_days: 7 },
//! );
//! let records = simulator.run(&observations).unwrap();
//! assert_eq!(records.len(), 2); // day 1 (init) and day 8
//! ```

pub mod error;
pub mod output;
pub mod portfolio;
pub mod rebalancing;
pub mod simulator;

pub use error::SimulationError;
pub use output::OutputRecord;
pub use portfolio::Portfolio;
pub use rebalancing::{RebalancingManager, RebalancingPolicy};
pub use simulator::HedgingSimulator;
