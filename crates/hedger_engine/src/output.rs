//! Output records.

use hedger_core::types::Date;
use serde::{Deserialize, Serialize};

/// Immutable portfolio snapshot emitted at initialisation and at every
/// rebalance event.
///
/// Appended to an ordered, append-only sequence and never mutated after
/// creation. Serialises with camelCase field names, matching the output
/// files downstream tooling already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Snapshot date.
    pub date: Date,
    /// Total mark-to-market portfolio value: cash plus the hedge valued
    /// at the day's spot prices.
    pub value: f64,
    /// Hedge ratios just set, one per instrument in configured order.
    pub deltas: Vec<f64>,
    /// Standard error of each delta estimate.
    pub deltas_std_dev: Vec<f64>,
    /// Option price estimate from the oracle.
    pub price: f64,
    /// Standard error of the price estimate.
    pub price_std_dev: f64,
}
