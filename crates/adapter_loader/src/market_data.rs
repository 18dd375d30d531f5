//! CSV market-data loading.
//!
//! Input is long format, one row per instrument per date:
//!
//! ```text
//! date,symbol,price
//! 2024-01-02,AAPL,185.25
//! 2024-01-02,MSFT,380.75
//! 2024-01-03,AAPL,186.10
//! 2024-01-03,MSFT,379.20
//! ```
//!
//! Rows are grouped by date into one observation per date, preserving
//! the file's symbol order within each date, and the observations are
//! returned sorted ascending by date. Every observation must carry the
//! same instrument set as the first one.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use hedger_core::market_data::MarketObservation;
use hedger_core::traits::MarketDataSource;
use hedger_core::types::{Date, MarketDataError};
use serde::Deserialize;
use tracing::info;

use crate::error::DataError;

#[derive(Debug, Deserialize)]
struct PriceRow {
    date: String,
    symbol: String,
    price: f64,
}

/// Reads long-format market data from any reader.
///
/// # Errors
/// `DataError` on IO/CSV/date problems, non-positive or non-finite
/// prices, an empty file, or an inconsistent instrument set.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<MarketObservation>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // Group rows by date, keeping first-appearance order of symbols
    let mut groups: Vec<(Date, Vec<(String, f64)>)> = Vec::new();
    for row in csv_reader.deserialize() {
        let row: PriceRow = row?;
        if !row.price.is_finite() || row.price <= 0.0 {
            return Err(DataError::InvalidPrice {
                symbol: row.symbol,
                date: row.date,
                price: row.price,
            });
        }
        let date = Date::parse(&row.date)?;
        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, prices)) => prices.push((row.symbol, row.price)),
            None => groups.push((date, vec![(row.symbol, row.price)])),
        }
    }
    if groups.is_empty() {
        return Err(DataError::Empty);
    }

    groups.sort_by_key(|(date, _)| *date);
    let observations: Vec<MarketObservation> = groups
        .into_iter()
        .map(|(date, prices)| MarketObservation::new(date, prices))
        .collect();

    // Every observation must carry the first one's instrument set
    let reference: HashSet<&str> = observations[0].iter().map(|(s, _)| s).collect();
    for observation in &observations[1..] {
        let set: HashSet<&str> = observation.iter().map(|(s, _)| s).collect();
        if observation.len() != observations[0].len() || set != reference {
            return Err(MarketDataError::InconsistentInstruments {
                date: observation.date(),
            }
            .into());
        }
    }

    info!(
        observations = observations.len(),
        instruments = observations[0].len(),
        "market data loaded"
    );
    Ok(observations)
}

/// File-backed market-data source.
///
/// # Examples
///
/// ```no_run
/// use adapter_loader::CsvMarketDataSource;
/// use hedger_core::traits::MarketDataSource;
///
/// let source = CsvMarketDataSource::new("market_data.csv");
/// let observations = source.observations().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CsvMarketDataSource {
    path: PathBuf,
}

impl CsvMarketDataSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarketDataSource for CsvMarketDataSource {
    type Error = DataError;

    fn observations(&self) -> Result<Vec<MarketObservation>, DataError> {
        read_observations(File::open(&self.path)?)
    }
}
