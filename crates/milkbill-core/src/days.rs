//! # Billing Period Days
//!
//! Inclusive day counting over the billing period, plus the calendar
//! defaults the form starts with.
//!
//! ```text
//!   from                             to
//!    │◄────────── 31 days ──────────►│
//!  01 Jan 2024                   31 Jan 2024
//!
//!  (to - from) = 30 whole days, + 1 because both ends are delivery days
//! ```

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::input::parse_date;
use crate::PAY_BY_DAY;

/// A billing period, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// Parses both ends from `YYYY-MM-DD`. `None` if either fails.
    pub fn parse(from: &str, to: &str) -> Option<Self> {
        Some(DateRange::new(parse_date(from)?, parse_date(to)?))
    }

    /// Number of days in the period counting both ends, or 0 when `to` is
    /// before `from`.
    pub fn days_inclusive(&self) -> i64 {
        let diff = self.to.signed_duration_since(self.from).num_days();
        if diff < 0 {
            0
        } else {
            diff + 1
        }
    }
}

/// Counts the days from `from` to `to`, both inclusive.
///
/// ## Rules
/// - Either date unparseable → 0
/// - `to` earlier than `from` → 0
/// - Otherwise `(to - from) + 1`
///
/// ## Example
/// ```rust
/// use milkbill_core::days_between_inclusive;
///
/// assert_eq!(days_between_inclusive("2024-01-01", "2024-01-31"), 31);
/// assert_eq!(days_between_inclusive("2024-01-05", "2024-01-05"), 1);
/// assert_eq!(days_between_inclusive("2024-01-31", "2024-01-01"), 0);
/// assert_eq!(days_between_inclusive("", "2024-01-01"), 0);
/// ```
pub fn days_between_inclusive(from: &str, to: &str) -> i64 {
    DateRange::parse(from, to)
        .map(|range| range.days_inclusive())
        .unwrap_or(0)
}

/// The whole calendar month before `today`.
pub fn default_billing_period(today: NaiveDate) -> DateRange {
    let first_this_month = first_of_month(today);
    let last_prev_month = first_this_month
        .checked_sub_days(Days::new(1))
        .unwrap_or(first_this_month);
    DateRange::new(first_of_month(last_prev_month), last_prev_month)
}

/// Pay-by date: the 5th of `today`'s month.
///
/// This is a fixed business rule; it does not depend on the billing period.
pub fn pay_by_date(today: NaiveDate) -> NaiveDate {
    today.with_day(PAY_BY_DAY).unwrap_or(today)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(date.day0())))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_one() {
        assert_eq!(days_between_inclusive("2024-02-29", "2024-02-29"), 1);
        assert_eq!(DateRange::new(ymd(2023, 7, 1), ymd(2023, 7, 1)).days_inclusive(), 1);
    }

    #[test]
    fn test_full_month() {
        assert_eq!(days_between_inclusive("2024-01-01", "2024-01-31"), 31);
        assert_eq!(days_between_inclusive("2024-02-01", "2024-02-28"), 28);
    }

    #[test]
    fn test_reversed_or_invalid_is_zero() {
        assert_eq!(days_between_inclusive("2024-01-31", "2024-01-01"), 0);
        assert_eq!(days_between_inclusive("2024-13-01", "2024-12-31"), 0);
        assert_eq!(days_between_inclusive("2024-02-30", "2024-03-01"), 0);
        assert_eq!(days_between_inclusive("not a date", "2024-03-01"), 0);
        assert_eq!(days_between_inclusive("2024-03-01", ""), 0);
    }

    #[test]
    fn test_across_year_boundary() {
        assert_eq!(days_between_inclusive("2023-12-31", "2024-01-01"), 2);
    }

    #[test]
    fn test_default_billing_period() {
        let period = default_billing_period(ymd(2024, 3, 18));
        assert_eq!(period, DateRange::new(ymd(2024, 2, 1), ymd(2024, 2, 29)));

        let january = default_billing_period(ymd(2025, 1, 1));
        assert_eq!(january, DateRange::new(ymd(2024, 12, 1), ymd(2024, 12, 31)));
    }

    #[test]
    fn test_pay_by_date_ignores_period() {
        assert_eq!(pay_by_date(ymd(2024, 3, 18)), ymd(2024, 3, 5));
        assert_eq!(pay_by_date(ymd(2024, 3, 1)), ymd(2024, 3, 5));
    }
}
