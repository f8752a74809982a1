//! # Input Coercion
//!
//! The clamp-and-default step at the form boundary. Raw field text goes
//! in, a usable number comes out; nothing here ever fails.
//!
//! ```text
//!   ""      ──► 0          "12.5" ──► 12.5
//!   "abc"   ──► 0          "-4"   ──► 0
//!   "inf"   ──► 0          " 7 "  ──► 7
//! ```

use chrono::NaiveDate;

/// Date format of the form's date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Coerces a raw numeric field to a non-negative finite number.
///
/// Empty, unparseable, non-finite and negative input all become `0.0`.
///
/// ## Example
/// ```rust
/// use milkbill_core::input::parse_amount;
///
/// assert_eq!(parse_amount("65.00"), 65.0);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("-3"), 0.0);
/// assert_eq!(parse_amount("ten"), 0.0);
/// ```
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Coerces a raw day-count field to whole, non-negative days.
///
/// Fractions are truncated: `"2.9"` is 2 days.
pub fn parse_day_count(raw: &str) -> i64 {
    parse_amount(raw).trunc() as i64
}

/// Parses a `YYYY-MM-DD` date field. `None` when unset or invalid.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// A field counts as unset when it holds only whitespace.
pub fn is_unset(raw: &str) -> bool {
    raw.trim().is_empty()
}
