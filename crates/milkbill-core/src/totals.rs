//! # Totals & Tax
//!
//! ```text
//! Σ line_total ─────────────► subtotal
//!                                │
//!                    × rate/100  ▼
//!                             tax_amount
//!                                │
//!        subtotal + tax_amount   ▼
//!                              total
//!
//! total_days − skipped_days ──► billable_days (floored at 0)
//! ```

use tracing::debug;

use crate::money::Rupees;
use crate::types::{LineItem, ReceiptTotals, TaxRate};

/// Computes subtotal, tax, total and billable days.
///
/// ## Rules
/// - `subtotal` is the sum of all line totals (0 for no items)
/// - `tax_rate_percent` is clamped to >= 0
/// - `tax_amount = subtotal × rate / 100`, `total = subtotal + tax_amount`
/// - `billable_days = max(0, total_days − max(0, skipped_days))`
///
/// ## Example
/// ```rust
/// use milkbill_core::{build_line_items, compute_totals, LineItemRow};
///
/// let items = build_line_items(&[LineItemRow::new(true, "Milk (cow)", "10", "65")]);
/// let totals = compute_totals(&items, 0.0, 31, 3);
///
/// assert_eq!(totals.total.value(), 650.0);
/// assert_eq!(totals.billable_days, 28);
/// ```
pub fn compute_totals(
    line_items: &[LineItem],
    tax_rate_percent: f64,
    total_days: i64,
    skipped_days: i64,
) -> ReceiptTotals {
    let subtotal: Rupees = line_items.iter().map(|item| item.line_total).sum();
    let tax_rate = TaxRate::from_percentage(tax_rate_percent);
    let tax_amount = subtotal.calculate_tax(tax_rate);
    let total = subtotal + tax_amount;
    let billable_days = total_days.saturating_sub(skipped_days.max(0)).max(0);

    debug!(
        items = line_items.len(),
        %subtotal,
        %tax_amount,
        %total,
        total_days,
        billable_days,
        "computed totals"
    );

    ReceiptTotals {
        subtotal,
        tax_rate,
        tax_amount,
        total,
        total_days,
        billable_days,
    }
}
