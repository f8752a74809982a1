//! # Line Item Builder
//!
//! Turns the raw milk rows of a snapshot into priced line items.
//!
//! ## Flow
//! ```text
//! LineItemRow { enabled: false, .. } ──► (dropped, no zero row)
//!
//! LineItemRow { enabled: true, "10", "65.00" }
//!      │
//!      ▼
//! parse_amount() on quantity and price   ← clamp-and-default
//!      │
//!      ▼
//! LineItem { quantity: 10, unit_price: 65, line_total: 650 }
//! ```

use tracing::trace;

use crate::input::parse_amount;
use crate::money::Rupees;
use crate::types::{LineItem, LineItemRow};

/// Builds one line item per enabled row, in row order.
///
/// Quantity and unit price are coerced with
/// [`parse_amount`](crate::input::parse_amount), so negative or
/// non-numeric input is priced at zero. `line_total` is not rounded.
///
/// ## Example
/// ```rust
/// use milkbill_core::{build_line_items, LineItemRow};
///
/// let rows = [
///     LineItemRow::new(true, "Milk (cow)", "10", "65"),
///     LineItemRow::new(false, "Milk (buffalo)", "4", "70"),
/// ];
/// let items = build_line_items(&rows);
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].line_total.value(), 650.0);
/// ```
pub fn build_line_items<'a, I>(rows: I) -> Vec<LineItem>
where
    I: IntoIterator<Item = &'a LineItemRow>,
{
    rows.into_iter()
        .filter(|row| row.enabled)
        .map(price_row)
        .collect()
}

fn price_row(row: &LineItemRow) -> LineItem {
    let quantity = parse_amount(&row.quantity);
    let unit_price = Rupees::new(parse_amount(&row.unit_price));
    let line_total = unit_price * quantity;

    trace!(label = %row.label, quantity, %unit_price, %line_total, "priced row");

    LineItem {
        label: row.label.clone(),
        quantity,
        unit_price,
        line_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cow(enabled: bool, qty: &str, price: &str) -> LineItemRow {
        LineItemRow::new(enabled, "Milk (cow)", qty, price)
    }

    fn buffalo(enabled: bool, qty: &str, price: &str) -> LineItemRow {
        LineItemRow::new(enabled, "Milk (buffalo)", qty, price)
    }

    #[test]
    fn test_single_enabled_row() {
        let items = build_line_items(&[cow(true, "10", "65"), buffalo(false, "", "70")]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Milk (cow)");
        assert_eq!(items[0].quantity, 10.0);
        assert_eq!(items[0].unit_price.value(), 65.0);
        assert_eq!(items[0].line_total.value(), 650.0);
    }

    #[test]
    fn test_disabled_rows_excluded_regardless_of_values() {
        let items = build_line_items(&[cow(false, "10", "65"), buffalo(false, "4", "70")]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_order_follows_rows() {
        let items = build_line_items(&[cow(true, "10", "65"), buffalo(true, "4", "70")]);
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Milk (cow)", "Milk (buffalo)"]);
        assert_eq!(items[1].line_total.value(), 280.0);
    }

    #[test]
    fn test_bad_input_clamps_to_zero_but_row_is_kept() {
        let items = build_line_items(&[cow(true, "-3", "abc")]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 0.0);
        assert!(items[0].unit_price.is_zero());
        assert!(items[0].line_total.is_zero());
    }

    #[test]
    fn test_no_rounding() {
        let items = build_line_items(&[cow(true, "0.333", "65")]);
        assert_eq!(items[0].line_total.value(), 0.333 * 65.0);
    }

    #[test]
    fn test_overflowing_rows_sum_to_infinity() {
        let rows = [cow(true, "1", "1e308"), buffalo(true, "1", "1e308")];
        let items = build_line_items(&rows);
        assert_eq!(items[0].line_total.value(), 1e308);
        let subtotal: Rupees = items.iter().map(|item| item.line_total).sum();
        assert!(subtotal.value().is_infinite());
    }

    #[test]
    fn test_idempotent() {
        let rows = [cow(true, "12.75", "65.5"), buffalo(true, "3.1", "70")];
        let first = build_line_items(&rows);
        let second = build_line_items(&rows);
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.line_total.value().to_bits(), b.line_total.value().to_bits());
        }
    }
}
