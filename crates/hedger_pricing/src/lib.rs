//! # hedger_pricing: Monte Carlo Pricing Oracle
//!
//! Concrete implementations of the `hedger_core` boundary traits:
//!
//! - [`MonteCarloBasketPricer`]: European basket call under correlated
//!   multi-asset geometric Brownian motion, with pathwise delta
//!   estimators and standard errors for both price and deltas
//! - [`ConstantRateProvider`]: flat continuously-compounded risk-free
//!   rate accrual
//!
//! # Reproducibility
//!
//! All randomness flows through [`rng::HedgerRng`], a seeded `StdRng`
//! wrapper. The basket pricer derives each call's stream from the
//! configured base seed and the pricing date, so replaying the same
//! backtest produces byte-identical output.
//!
//! # Example
//!
//! ```
//! use hedger_core::traits::Pricer;
//! use hedger_core::types::Date;
//! use hedger_pricing::mc::{MonteCarloConfig, MonteCarloBasketPricer};
//! use hedger_pricing::{BasketOption, GbmMarketModel};
//!
//! let option = BasketOption::new(
//!     vec![0.5, 0.5],
//!     100.0,
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//! )
//! .unwrap();
//! let model = GbmMarketModel::new(0.03, vec![0.2, 0.25], 0.3).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_samples(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut pricer = MonteCarloBasketPricer::new(option, model, config).unwrap();
//! let result = pricer
//!     .price(Date::from_ymd(2024, 1, 1).unwrap(), &[100.0, 120.0])
//!     .unwrap();
//! assert!(result.price > 0.0);
//! assert_eq!(result.deltas.len(), 2);
//! ```

pub mod basket;
pub mod mc;
pub mod provider;
pub mod rng;

pub use basket::{BasketOption, GbmMarketModel};
pub use mc::MonteCarloBasketPricer;
pub use provider::ConstantRateProvider;
