//! Portfolio state.

use crate::error::SimulationError;

/// Mutable portfolio state owned by the simulator.
///
/// Holds `cash` (any sign) and one quantity per underlying instrument.
/// The instrument set is fixed at construction; only the values and the
/// cash mutate, and only through [`Portfolio::set_state`]. The portfolio
/// lives for the duration of one simulation and is never aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    cash: f64,
    symbols: Vec<String>,
    quantities: Vec<f64>,
}

impl Portfolio {
    /// Creates a portfolio with zero cash and all-zero positions.
    pub fn new(symbols: Vec<String>) -> Self {
        let quantities = vec![0.0; symbols.len()];
        Self {
            cash: 0.0,
            symbols,
            quantities,
        }
    }

    /// Current cash position.
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Instrument symbols in their fixed order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Held quantities, positionally aligned with [`Portfolio::symbols`].
    pub fn quantities(&self) -> &[f64] {
        &self.quantities
    }

    /// Composition as `(symbol, quantity)` pairs in the fixed order.
    pub fn composition(&self) -> impl Iterator<Item = (&str, f64)> {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.quantities.iter().copied())
    }

    /// Replaces cash and every position value positionally.
    ///
    /// The values are written in place; the key set never changes. This
    /// is the only mutation path.
    ///
    /// # Errors
    /// `SimulationError::QuantityCountMismatch` if `quantities` does not
    /// have one entry per instrument. The portfolio is left untouched in
    /// that case; the violation is fatal for the run.
    pub fn set_state(&mut self, cash: f64, quantities: &[f64]) -> Result<(), SimulationError> {
        if quantities.len() != self.quantities.len() {
            return Err(SimulationError::QuantityCountMismatch {
                expected: self.quantities.len(),
                actual: quantities.len(),
            });
        }
        self.cash = cash;
        self.quantities.copy_from_slice(quantities);
        Ok(())
    }
}
