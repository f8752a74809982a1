//! # Receipt Recomputation
//!
//! "Snapshot in, receipt out." Every input change produces a new
//! [`ReceiptForm`] snapshot; [`calculate`] derives the line items and
//! totals from it, and [`ReceiptPreview::render`] turns those into the
//! strings the preview shows.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReceiptForm (raw strings)                                             │
//! │       │                                                                 │
//! │       ├── date_from/date_to ──► days_between_inclusive ──┐             │
//! │       ├── skipped_days ───────► parse_day_count ─────────┤             │
//! │       ├── tax_rate ───────────► parse_amount ────────────┤             │
//! │       └── cow/buffalo ────────► build_line_items ────────┤             │
//! │                                                           ▼             │
//! │                                               compute_totals            │
//! │                                                           │             │
//! │                                                           ▼             │
//! │                                                    Calculation          │
//! │                                                     │        │          │
//! │                                       validate() ◄──┘        └──► render│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::days::{days_between_inclusive, pay_by_date};
use crate::error::ErrorKind;
use crate::format::{format_date, format_date_field, format_quantity, PLACEHOLDER};
use crate::input::{is_unset, parse_amount, parse_day_count};
use crate::line_items::build_line_items;
use crate::money::Rupees;
use crate::totals::compute_totals;
use crate::types::{LineItem, ReceiptForm, ReceiptTotals};
use crate::validation::ValidationInput;

// =============================================================================
// Calculation
// =============================================================================

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub line_items: Vec<LineItem>,
    pub totals: ReceiptTotals,
    /// Skipped days after clamping.
    pub skipped_days: i64,
}

/// Recomputes line items and totals from a snapshot.
///
/// ## Example
/// ```rust
/// use milkbill_core::{calculate, ReceiptForm};
///
/// let mut form = ReceiptForm::default();
/// form.date_from = "2024-01-01".into();
/// form.date_to = "2024-01-31".into();
/// form.tax_rate = "5".into();
/// form.cow.enabled = true;
/// form.cow.quantity = "10".into();
/// form.cow.unit_price = "65".into();
///
/// let calc = calculate(&form);
/// assert_eq!(calc.totals.total_days, 31);
/// assert_eq!(calc.totals.total.value(), 682.5);
/// ```
pub fn calculate(form: &ReceiptForm) -> Calculation {
    let total_days = days_between_inclusive(&form.date_from, &form.date_to);
    let skipped_days = parse_day_count(&form.skipped_days);
    let tax_rate = parse_amount(&form.tax_rate);
    let line_items = build_line_items(form.rows());
    let totals = compute_totals(&line_items, tax_rate, total_days, skipped_days);

    debug!(
        total_days,
        skipped_days,
        items = line_items.len(),
        "recomputed receipt"
    );

    Calculation {
        line_items,
        totals,
        skipped_days,
    }
}

impl Calculation {
    /// Validates `form` against this calculation.
    ///
    /// `self` must have been calculated from the same `form`.
    pub fn validate(&self, form: &ReceiptForm) -> Option<ErrorKind> {
        ValidationInput {
            billed_to: &form.billed_to,
            date_from: &form.date_from,
            date_to: &form.date_to,
            total_days: self.totals.total_days,
            billable_days: self.totals.billable_days,
            line_items: &self.line_items,
        }
        .check()
    }
}

// =============================================================================
// Preview
// =============================================================================

/// One rendered row of the receipt table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    pub label: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

impl PreviewRow {
    /// The row shown when no milk option is selected.
    pub fn placeholder() -> Self {
        PreviewRow {
            label: PLACEHOLDER.to_string(),
            quantity: PLACEHOLDER.to_string(),
            unit_price: PLACEHOLDER.to_string(),
            line_total: PLACEHOLDER.to_string(),
        }
    }
}

impl From<&LineItem> for PreviewRow {
    fn from(item: &LineItem) -> Self {
        PreviewRow {
            label: item.label.clone(),
            quantity: format_quantity(item.quantity),
            unit_price: item.unit_price.to_string(),
            line_total: item.line_total.to_string(),
        }
    }
}

/// The receipt preview, fully formatted for display.
///
/// ## Layout
/// ```text
/// ┌───────────────────────────────────────────────┐
/// │  Billed to:  Asha              Pay by: 05 Mar │
/// │  01 Feb 2024 - 29 Feb 2024                    │
/// │  Skipped days: 2                              │
/// │  ───────────────────────────────────────────  │
/// │  Milk (cow)    10.00 L  Rs. 65.00  Rs. 650.00 │
/// │  ───────────────────────────────────────────  │
/// │  Subtotal                          Rs. 650.00 │
/// │  Tax                                 Rs. 0.00 │
/// │  Total                             Rs. 650.00 │
/// └───────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPreview {
    pub billed_to: String,
    pub date_range: String,
    pub skipped: String,
    pub pay_by_date: String,
    pub rows: Vec<PreviewRow>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    /// Message of the first failed validation rule, if any.
    pub error_message: Option<String>,
}

impl ReceiptPreview {
    /// Renders the preview for `form`.
    ///
    /// `calculation` must come from [`calculate`] on the same `form`;
    /// `today` only decides the pay-by date.
    pub fn render(form: &ReceiptForm, calculation: &Calculation, today: NaiveDate) -> Self {
        let totals = &calculation.totals;

        let billed_to = match form.billed_to.trim() {
            "" => PLACEHOLDER.to_string(),
            name => name.to_string(),
        };

        let date_range = if is_unset(&form.date_from) || is_unset(&form.date_to) {
            "Select dates".to_string()
        } else {
            format!(
                "{} - {}",
                format_date_field(&form.date_from),
                format_date_field(&form.date_to)
            )
        };

        let rows = if calculation.line_items.is_empty() {
            vec![PreviewRow::placeholder()]
        } else {
            calculation.line_items.iter().map(PreviewRow::from).collect()
        };

        let tax = if totals.tax_rate.is_zero() {
            Rupees::zero().to_string()
        } else {
            totals.tax_amount.to_string()
        };

        ReceiptPreview {
            billed_to,
            date_range,
            skipped: format!("Skipped days: {}", calculation.skipped_days),
            pay_by_date: format_date(pay_by_date(today)),
            rows,
            subtotal: amount_or_placeholder(totals.subtotal, totals.subtotal),
            tax,
            total: amount_or_placeholder(totals.subtotal, totals.total),
            error_message: calculation.validate(form).map(|kind| kind.to_string()),
        }
    }
}

/// Shows `amount`, or `"-"` while the receipt has no subtotal.
fn amount_or_placeholder(subtotal: Rupees, amount: Rupees) -> String {
    if subtotal.is_zero() {
        PLACEHOLDER.to_string()
    } else {
        amount.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
