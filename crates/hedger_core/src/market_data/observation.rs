//! Market observations.
//!
//! A [`MarketObservation`] is an immutable value: one date plus the
//! observed price of every instrument on that date. The simulation
//! consumes an ordered sequence of these, sorted ascending by date with
//! no duplicates; that ordering is a precondition checked by the
//! simulator, not repaired here.

use crate::types::error::MarketDataError;
use crate::types::time::Date;

/// A dated set of instrument prices.
///
/// Prices are stored as `(symbol, price)` pairs in insertion order. The
/// order used everywhere downstream (spot vectors, deltas, portfolio
/// composition) is the configured instrument list, not this insertion
/// order; [`MarketObservation::spot_vector`] performs the positional
/// lookup.
///
/// # Examples
///
/// ```
/// use hedger_core::market_data::MarketObservation;
/// use hedger_core::types::Date;
///
/// let obs = MarketObservation::new(
///     Date::from_ymd(2024, 1, 2).unwrap(),
///     vec![("AAPL".to_string(), 185.25), ("MSFT".to_string(), 380.75)],
/// );
///
/// let spots = obs
///     .spot_vector(&["MSFT".to_string(), "AAPL".to_string()])
///     .unwrap();
/// assert_eq!(spots, vec![380.75, 185.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarketObservation {
    date: Date,
    prices: Vec<(String, f64)>,
}

impl MarketObservation {
    /// Creates an observation from a date and `(symbol, price)` pairs.
    pub fn new(date: Date, prices: Vec<(String, f64)>) -> Self {
        Self { date, prices }
    }

    /// Returns the observation date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the observed price for `symbol`, if present.
    pub fn price(&self, symbol: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, p)| *p)
    }

    /// Returns the number of instruments in this observation.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the observation holds no prices.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over `(symbol, price)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices.iter().map(|(s, p)| (s.as_str(), *p))
    }

    /// Builds the spot vector positionally against `symbols`.
    ///
    /// The result has one entry per configured instrument, in the
    /// configured order. This is the only way spot vectors are built, so
    /// deltas and portfolio quantities stay positionally aligned.
    ///
    /// # Errors
    /// Returns `MarketDataError::MissingInstrument` if any configured
    /// symbol has no price in this observation, and
    /// `MarketDataError::InconsistentInstruments` if the observation
    /// carries a different number of instruments than configured.
    pub fn spot_vector(&self, symbols: &[String]) -> Result<Vec<f64>, MarketDataError> {
        if self.prices.len() != symbols.len() {
            return Err(MarketDataError::InconsistentInstruments { date: self.date });
        }
        symbols
            .iter()
            .map(|symbol| {
                self.price(symbol).ok_or_else(|| {
                    MarketDataError::MissingInstrument {
                        symbol: symbol.clone(),
                        date: self.date,
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(date: Date) -> MarketObservation {
        MarketObservation::new(
            date,
            vec![("A".to_string(), 100.0), ("B".to_string(), 50.0)],
        )
    }

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_price_lookup() {
        let o = obs(d(2024, 1, 2));
        assert_eq!(o.price("A"), Some(100.0));
        assert_eq!(o.price("B"), Some(50.0));
        assert_eq!(o.price("C"), None);
    }

    #[test]
    fn test_spot_vector_follows_configured_order() {
        let o = obs(d(2024, 1, 2));
        let spots = o
            .spot_vector(&["B".to_string(), "A".to_string()])
            .unwrap();
        assert_eq!(spots, vec![50.0, 100.0]);
    }

    #[test]
    fn test_spot_vector_missing_instrument() {
        let o = obs(d(2024, 1, 2));
        let err = o
            .spot_vector(&["A".to_string(), "C".to_string()])
            .unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::MissingInstrument { ref symbol, .. } if symbol == "C"
        ));
    }

    #[test]
    fn test_spot_vector_inconsistent_count() {
        let o = obs(d(2024, 1, 2));
        let err = o.spot_vector(&["A".to_string()]).unwrap_err();
        assert_eq!(
            err,
            MarketDataError::InconsistentInstruments {
                date: d(2024, 1, 2)
            }
        );
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let o = obs(d(2024, 1, 2));
        let symbols: Vec<&str> = o.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["A", "B"]);
    }
}
