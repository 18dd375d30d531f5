//! Hedging simulator.
//!
//! Walks the observation sequence strictly forward in time. The first
//! observation initialises the portfolio; every later observation either
//! triggers a rebalance (pricer call, cash accrual, position reset,
//! snapshot) or is silent (no pricer call, no mutation, no record).
//! Processing is single-threaded and strictly sequential: each step
//! completes in full before the next is considered, and the portfolio
//! and last-rebalance date are owned and mutated by the simulator alone.

use hedger_core::market_data::MarketObservation;
use hedger_core::math::dot;
use hedger_core::traits::{Pricer, PricingResult, RiskFreeRateProvider};
use hedger_core::types::{Date, RateError};
use tracing::{debug, info};

use crate::error::SimulationError;
use crate::output::OutputRecord;
use crate::portfolio::Portfolio;
use crate::rebalancing::{RebalancingManager, RebalancingPolicy};

/// Simulates a delta-hedged option position over a historical series.
///
/// Owns the pricing oracle and rate provider for the duration of a run;
/// the portfolio and rebalancing manager are constructed per run and
/// threaded through the loop, never aliased elsewhere.
pub struct HedgingSimulator<P, R> {
    pricer: P,
    rates: R,
    symbols: Vec<String>,
    policy: RebalancingPolicy,
}

impl<P: Pricer, R: RiskFreeRateProvider> HedgingSimulator<P, R> {
    /// Creates a simulator over the configured instrument order.
    ///
    /// `symbols` fixes the positional order of spot vectors, deltas, and
    /// portfolio quantities for the whole run.
    pub fn new(pricer: P, rates: R, symbols: Vec<String>, policy: RebalancingPolicy) -> Self {
        Self {
            pricer,
            rates,
            symbols,
            policy,
        }
    }

    /// Runs the simulation over `observations` and returns the ordered
    /// snapshot sequence.
    ///
    /// Observations must be sorted ascending by date with no duplicates
    /// and carry the configured instrument set; violations are reported
    /// before any state mutation for the offending step. Oracle and
    /// rate-provider failures propagate unmodified and abort the run;
    /// whatever was accumulated so far is discarded with the error.
    ///
    /// # Errors
    /// See [`SimulationError`].
    pub fn run(
        &mut self,
        observations: &[MarketObservation],
    ) -> Result<Vec<OutputRecord>, SimulationError> {
        let first = observations.first().ok_or(SimulationError::EmptyMarketData)?;

        let mut portfolio = Portfolio::new(self.symbols.clone());
        let mut manager = RebalancingManager::new(self.policy, first.date());
        let mut records = Vec::new();

        // Initialisation: self-financing start. The option premium funds
        // the initial hedge; whatever is left (usually negative) is cash.
        let spots = first.spot_vector(&self.symbols)?;
        let result = self.price_checked(first.date(), &spots)?;
        let cash = result.price - dot(&result.deltas, &spots);
        portfolio.set_state(cash, &result.deltas)?;
        let record = Self::snapshot(first.date(), &portfolio, &spots, &result);
        info!(date = %first.date(), value = record.value, "portfolio initialised");
        records.push(record);

        let mut prev_date = first.date();
        for (index, observation) in observations.iter().enumerate().skip(1) {
            let date = observation.date();
            if date <= prev_date {
                return Err(SimulationError::NonChronological { index, date });
            }
            let spots = observation.spot_vector(&self.symbols)?;

            if !manager.should_rebalance(date) {
                // Silent step: no pricer call, no mutation, no record.
                debug!(date = %date, "no rebalance due");
                prev_date = date;
                continue;
            }

            let result = self.price_checked(date, &spots)?;
            let factor =
                self.accrued_factor_checked(manager.last_rebalance_date(), date)?;

            // Prior cash grown at the risk-free rate, plus the old hedge
            // marked at today's spots, minus the cost of the new hedge.
            let updated_cash = portfolio.cash() * factor
                + dot(portfolio.quantities(), &spots)
                - dot(&result.deltas, &spots);

            portfolio.set_state(updated_cash, &result.deltas)?;
            manager.set_last_rebalance_date(date);

            let record = Self::snapshot(date, &portfolio, &spots, &result);
            debug!(
                date = %date,
                value = record.value,
                cash = portfolio.cash(),
                accrual = factor,
                "rebalanced"
            );
            records.push(record);
            prev_date = date;
        }

        info!(records = records.len(), "simulation complete");
        Ok(records)
    }

    /// Calls the oracle and validates its result against the instrument
    /// count before anything is booked.
    fn price_checked(
        &mut self,
        date: Date,
        spots: &[f64],
    ) -> Result<PricingResult, SimulationError> {
        let result = self.pricer.price(date, spots)?;
        result.validate(self.symbols.len())?;
        Ok(result)
    }

    fn accrued_factor_checked(&self, from: Date, to: Date) -> Result<f64, SimulationError> {
        let factor = self.rates.accrued_factor(from, to)?;
        if !factor.is_finite() || factor < 0.0 {
            return Err(SimulationError::Rate(RateError::InvalidFactor { factor }));
        }
        Ok(factor)
    }

    /// Snapshot rule, shared by initialisation and rebalance: value is
    /// cash plus the just-set hedge at today's spots.
    fn snapshot(
        date: Date,
        portfolio: &Portfolio,
        spots: &[f64],
        result: &PricingResult,
    ) -> OutputRecord {
        OutputRecord {
            date,
            value: portfolio.cash() + dot(portfolio.quantities(), spots),
            deltas: result.deltas.clone(),
            deltas_std_dev: result.delta_std_dev.clone(),
            price: result.price,
            price_std_dev: result.price_std_dev,
        }
    }
}
