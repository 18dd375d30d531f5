//! Rebalancing decision policy.
//!
//! The decision of *whether* to rebalance on a date is a pure predicate;
//! the action (repricing, accounting, advancing the last-rebalance date)
//! belongs to the simulator. The two are deliberately separated: the
//! policy never owns or updates the state it is evaluated against.

use chrono::Weekday;

use hedger_core::types::Date;

/// When to rebalance, as a closed set of variants.
///
/// Dispatch is closed and small, so a tagged enum with one decision rule
/// per variant is used rather than trait objects. Future variants must
/// compose under the same `(date, last_rebalance_date) -> bool` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalancingPolicy {
    /// Rebalance once at least `period_days` whole calendar days have
    /// elapsed since the last rebalance.
    Periodic {
        /// Minimum elapsed whole days between rebalances.
        period_days: u32,
    },

    /// Rebalance on every observation falling on `weekday`, regardless
    /// of elapsed time.
    ///
    /// On data sampled more finely than daily this fires on every
    /// matching-weekday observation, not once per week; callers wanting
    /// a single daily rebalance must pre-filter to one observation per
    /// day.
    Weekly {
        /// Target day of the week.
        weekday: Weekday,
    },
}

impl RebalancingPolicy {
    /// Evaluates the policy for `current` given the last rebalance date.
    ///
    /// Elapsed time is the civil-calendar day difference (one calendar
    /// day = 1 unit), not fixed 24h blocks, matching the semantics of a
    /// historical daily series.
    pub fn should_rebalance(&self, current: Date, last_rebalance: Date) -> bool {
        match self {
            RebalancingPolicy::Periodic { period_days } => {
                current - last_rebalance >= i64::from(*period_days)
            }
            RebalancingPolicy::Weekly { weekday } => current.weekday() == *weekday,
        }
    }
}

/// Tracks the last rebalance date and evaluates the policy against it.
///
/// The manager never advances `last_rebalance_date` itself; the
/// simulator does so after actually executing a rebalance, keeping the
/// decision a side-effect-free read.
#[derive(Debug, Clone)]
pub struct RebalancingManager {
    policy: RebalancingPolicy,
    last_rebalance_date: Date,
}

impl RebalancingManager {
    /// Creates a manager with `last_rebalance_date` set to the first
    /// observation's date.
    pub fn new(policy: RebalancingPolicy, initial_date: Date) -> Self {
        Self {
            policy,
            last_rebalance_date: initial_date,
        }
    }

    /// The configured policy.
    pub fn policy(&self) -> &RebalancingPolicy {
        &self.policy
    }

    /// Date of the last executed rebalance.
    pub fn last_rebalance_date(&self) -> Date {
        self.last_rebalance_date
    }

    /// Whether a rebalance is due at `current`.
    pub fn should_rebalance(&self, current: Date) -> bool {
        self.policy.should_rebalance(current, self.last_rebalance_date)
    }

    /// Records that a rebalance was executed at `date`.
    ///
    /// Called by the simulator only, immediately after it has applied
    /// the rebalance accounting.
    pub fn set_last_rebalance_date(&mut self, date: Date) {
        self.last_rebalance_date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_periodic_fires_at_or_after_period() {
        let policy = RebalancingPolicy::Periodic { period_days: 7 };
        let last = d(2024, 1, 1);

        assert!(!policy.should_rebalance(d(2024, 1, 2), last));
        assert!(!policy.should_rebalance(d(2024, 1, 7), last));
        assert!(policy.should_rebalance(d(2024, 1, 8), last)); // exactly 7 days
        assert!(policy.should_rebalance(d(2024, 1, 20), last));
    }

    #[test]
    fn test_periodic_one_day_fires_every_day() {
        let policy = RebalancingPolicy::Periodic { period_days: 1 };
        assert!(policy.should_rebalance(d(2024, 1, 2), d(2024, 1, 1)));
    }

    #[test]
    fn test_periodic_same_day_does_not_fire() {
        let policy = RebalancingPolicy::Periodic { period_days: 1 };
        assert!(!policy.should_rebalance(d(2024, 1, 1), d(2024, 1, 1)));
    }

    #[test]
    fn test_weekly_fires_only_on_target_weekday() {
        let policy = RebalancingPolicy::Weekly {
            weekday: Weekday::Wed,
        };
        let last = d(2024, 1, 1);

        // 2024-01-03 is a Wednesday
        assert!(policy.should_rebalance(d(2024, 1, 3), last));
        assert!(!policy.should_rebalance(d(2024, 1, 4), last));
        assert!(policy.should_rebalance(d(2024, 1, 10), last));
    }

    #[test]
    fn test_weekly_ignores_elapsed_time() {
        let policy = RebalancingPolicy::Weekly {
            weekday: Weekday::Wed,
        };
        // Last rebalance was this very Wednesday; the predicate still fires
        let wednesday = d(2024, 1, 3);
        assert!(policy.should_rebalance(wednesday, wednesday));
    }

    #[test]
    fn test_manager_does_not_advance_on_read() {
        let manager = RebalancingManager::new(
            RebalancingPolicy::Periodic { period_days: 7 },
            d(2024, 1, 1),
        );

        assert!(manager.should_rebalance(d(2024, 1, 8)));
        // Reading the decision leaves the state untouched
        assert_eq!(manager.last_rebalance_date(), d(2024, 1, 1));
    }

    #[test]
    fn test_manager_advances_only_when_told() {
        let mut manager = RebalancingManager::new(
            RebalancingPolicy::Periodic { period_days: 7 },
            d(2024, 1, 1),
        );

        manager.set_last_rebalance_date(d(2024, 1, 8));
        assert_eq!(manager.last_rebalance_date(), d(2024, 1, 8));
        assert!(!manager.should_rebalance(d(2024, 1, 10)));
        assert!(manager.should_rebalance(d(2024, 1, 15)));
    }
}
