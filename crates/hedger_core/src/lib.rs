//! # hedger_core: Foundation for the Hedging Backtest Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! hedger_core serves as the bottom layer of the workspace, providing:
//! - Time types: `Date` and calendar-day arithmetic (`types::time`)
//! - Error types: `DateError`, `PricingError`, `RateError`, `MarketDataError` (`types::error`)
//! - Vector maths helpers (`math`)
//! - Market observation and rate-curve types (`market_data`)
//! - Boundary traits for the pricing oracle and rate provider (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other hedger_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - serde: Serialisation support
//! - thiserror: Structured error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use hedger_core::math::dot;
//! use hedger_core::types::{Date, year_fraction_act365};
//!
//! // Date operations
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 11).unwrap();
//! assert_eq!(end - start, 10);
//!
//! // ACT/365 year fraction
//! let tau = year_fraction_act365(start, end);
//! assert!((tau - 10.0 / 365.0).abs() < 1e-12);
//!
//! // Dot product
//! assert_eq!(dot(&[0.5, 0.3], &[100.0, 50.0]), 65.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod traits;
pub mod types;
