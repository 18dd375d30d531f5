//! Time types for the historical backtest series.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Calendar-day subtraction (one calendar day = 1 unit)
//! - ACT/365 year fractions for rate accrual and option maturities
//!
//! # Examples
//!
//! ```
//! use hedger_core::types::time::{Date, year_fraction_act365};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! assert_eq!(end - start, 182);
//! assert!((year_fraction_act365(start, end) - 182.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the day-granular arithmetic the
/// rebalancing policies rely on. Subtraction yields whole calendar days,
/// so elapsed time between two observations is never distorted by
/// timezones or DST.
///
/// # Examples
///
/// ```
/// use hedger_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calendar-day distance
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` for impossible dates
    /// (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Errors
    /// Returns `DateError::ParseError` if the string is not a valid
    /// ISO 8601 date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    ///
    /// # Examples
    ///
    /// ```
    /// use hedger_core::types::time::Date;
    /// use chrono::Weekday;
    ///
    /// // 2024-06-12 is a Wednesday
    /// let date = Date::from_ymd(2024, 6, 12).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Wed);
    /// ```
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns this date shifted by `days` calendar days.
    ///
    /// # Examples
    ///
    /// ```
    /// use hedger_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.plus_days(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(date.plus_days(-28), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn plus_days(self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of whole calendar days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// ACT/365 year fraction between two dates.
///
/// Whole calendar days divided by 365. Negative when `start > end`; the
/// sign indicates direction, which rate accrual uses to reject reversed
/// intervals rather than silently discounting.
///
/// # Examples
///
/// ```
/// use hedger_core::types::time::{Date, year_fraction_act365};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 1, 1).unwrap();
///
/// // 2024 is a leap year
/// assert!((year_fraction_act365(start, end) - 366.0 / 365.0).abs() < 1e-12);
/// ```
pub fn year_fraction_act365(start: Date, end: Date) -> f64 {
    (end - start) as f64 / 365.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_date_from_ymd_valid() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        // Non-leap year February 29
        assert!(Date::from_ymd(2023, 2, 29).is_err());
    }

    #[test]
    fn test_date_parse_valid() {
        let date = Date::parse("2024-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_date_parse_invalid() {
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2024/06/15").is_err());
    }

    #[test]
    fn test_date_display_roundtrip() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let shown = format!("{}", date);
        assert_eq!(shown, "2024-06-15");
        assert_eq!(shown.parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_date_subtraction() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 11).unwrap();
        assert_eq!(end - start, 10);
        assert_eq!(start - end, -10);
    }

    #[test]
    fn test_date_subtraction_crosses_dst_boundaries() {
        // Civil-calendar days only; a spring-forward weekend is still 7 days
        let before = Date::from_ymd(2024, 3, 29).unwrap();
        let after = Date::from_ymd(2024, 4, 5).unwrap();
        assert_eq!(after - before, 7);
    }

    #[test]
    fn test_plus_days_inverts_subtraction() {
        let start = Date::from_ymd(2024, 2, 27).unwrap();
        let shifted = start.plus_days(3);
        assert_eq!(shifted, Date::from_ymd(2024, 3, 1).unwrap());
        assert_eq!(shifted - start, 3);
    }

    #[test]
    fn test_date_ordering() {
        let earlier = Date::from_ymd(2024, 1, 1).unwrap();
        let later = Date::from_ymd(2024, 12, 31).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_weekday() {
        // 2024-06-12 is a Wednesday, 2024-06-15 a Saturday
        assert_eq!(
            Date::from_ymd(2024, 6, 12).unwrap().weekday(),
            Weekday::Wed
        );
        assert_eq!(
            Date::from_ymd(2024, 6, 15).unwrap().weekday(),
            Weekday::Sat
        );
    }

    #[test]
    fn test_year_fraction_act365_known_dates() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();
        assert_relative_eq!(
            year_fraction_act365(start, end),
            182.0 / 365.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_year_fraction_act365_same_date_is_zero() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(year_fraction_act365(date, date), 0.0);
    }

    #[test]
    fn test_year_fraction_act365_negative() {
        let start = Date::from_ymd(2024, 7, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 1).unwrap();
        assert_relative_eq!(
            year_fraction_act365(start, end),
            -182.0 / 365.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_date_serde_roundtrip() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-06-15\"");

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #[test]
            fn test_day_distance_is_additive(
                a in date_strategy(),
                b in date_strategy(),
                c in date_strategy(),
            ) {
                prop_assert_eq!((b - a) + (c - b), c - a);
            }

            #[test]
            fn test_year_fraction_sign_matches_ordering(
                a in date_strategy(),
                b in date_strategy(),
            ) {
                let yf = year_fraction_act365(a, b);
                if a < b {
                    prop_assert!(yf > 0.0);
                } else if a > b {
                    prop_assert!(yf < 0.0);
                } else {
                    prop_assert_eq!(yf, 0.0);
                }
            }

            #[test]
            fn test_display_parse_roundtrip(date in date_strategy()) {
                let parsed: Date = format!("{}", date).parse().unwrap();
                prop_assert_eq!(parsed, date);
            }
        }
    }
}
