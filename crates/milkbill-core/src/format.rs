//! # Display Formatting
//!
//! The receipt's fixed display formats. Currency lives on
//! [`Rupees`](crate::money::Rupees)'s `Display`; dates and quantities are here.
//!
//! | value       | format          | example         |
//! |-------------|-----------------|-----------------|
//! | date        | `DD Mon YYYY`   | `01 Feb 2024`   |
//! | quantity    | 2 decimals + L  | `10.00 L`       |
//! | currency    | `Rs. ` + 2 dp   | `Rs. 650.00`    |

use chrono::NaiveDate;

use crate::input::parse_date;

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "-";

/// Formats a date as `DD Mon YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Formats a raw date field, or `"-"` when it is unset or invalid.
///
/// ## Example
/// ```rust
/// use milkbill_core::format::format_date_field;
///
/// assert_eq!(format_date_field("2024-02-01"), "01 Feb 2024");
/// assert_eq!(format_date_field(""), "-");
/// ```
pub fn format_date_field(raw: &str) -> String {
    parse_date(raw)
        .map(format_date)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Formats litres with two decimals, e.g. `"12.50 L"`.
pub fn format_quantity(litres: f64) -> String {
    format!("{:.2} L", litres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        assert_eq!(format_date(date), "05 Dec 2024");
    }

    #[test]
    fn test_format_date_field_invalid() {
        assert_eq!(format_date_field("2024-02-30"), "-");
        assert_eq!(format_date_field("   "), "-");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(10.0), "10.00 L");
        assert_eq!(format_quantity(0.5), "0.50 L");
    }
}
