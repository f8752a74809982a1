//! # Validation Module
//!
//! Decides whether a receipt snapshot may be submitted or exported.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ordered Rule Table                                 │
//! │                                                                         │
//! │   #  rule fails when...                      reports                    │
//! │   ─  ─────────────────────────────────────   ───────────────────────    │
//! │   1  billed-to is blank                      MissingBilledTo            │
//! │   2  either date field is blank              MissingDates               │
//! │   3  total_days <= 0                         InvalidDateOrder           │
//! │   4  billable_days <= 0                      SkippedExceedsTotal        │
//! │   5  no line items                           NoLineItemSelected         │
//! │   6  an item has qty <= 0 or price <= 0      InvalidLineItemValues      │
//! │                                                                         │
//! │   Evaluated top to bottom. The FIRST failing rule wins; the rest are   │
//! │   never looked at.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use milkbill_core::{build_line_items, validate, ErrorKind, LineItemRow};
//!
//! let items = build_line_items(&[LineItemRow::new(true, "Milk (cow)", "10", "65")]);
//!
//! assert_eq!(validate("Asha", "2024-02-01", "2024-02-28", 28, 28, &items), None);
//! assert_eq!(
//!     validate("  ", "2024-02-01", "2024-02-28", 28, 28, &items),
//!     Some(ErrorKind::MissingBilledTo)
//! );
//! ```

use tracing::debug;

use crate::error::ErrorKind;
use crate::input::is_unset;
use crate::types::LineItem;

/// Everything the validator looks at, borrowed from one snapshot and its
/// computed totals.
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub billed_to: &'a str,
    pub date_from: &'a str,
    pub date_to: &'a str,
    pub total_days: i64,
    pub billable_days: i64,
    /// Line items of the enabled rows only.
    pub line_items: &'a [LineItem],
}

/// A predicate that returns `true` when its rule is violated.
type Rule = fn(&ValidationInput<'_>) -> bool;

/// The rule table, in precedence order.
const RULES: [(ErrorKind, Rule); 6] = [
    (ErrorKind::MissingBilledTo, billed_to_blank),
    (ErrorKind::MissingDates, dates_blank),
    (ErrorKind::InvalidDateOrder, period_empty),
    (ErrorKind::SkippedExceedsTotal, nothing_billable),
    (ErrorKind::NoLineItemSelected, no_line_items),
    (ErrorKind::InvalidLineItemValues, unpriced_line_item),
];

fn billed_to_blank(input: &ValidationInput<'_>) -> bool {
    is_unset(input.billed_to)
}

fn dates_blank(input: &ValidationInput<'_>) -> bool {
    is_unset(input.date_from) || is_unset(input.date_to)
}

fn period_empty(input: &ValidationInput<'_>) -> bool {
    input.total_days <= 0
}

fn nothing_billable(input: &ValidationInput<'_>) -> bool {
    input.billable_days <= 0
}

fn no_line_items(input: &ValidationInput<'_>) -> bool {
    input.line_items.is_empty()
}

fn unpriced_line_item(input: &ValidationInput<'_>) -> bool {
    input
        .line_items
        .iter()
        .any(|item| item.quantity <= 0.0 || item.unit_price.value() <= 0.0)
}

impl ValidationInput<'_> {
    /// Runs the rule table and returns the first violated rule.
    pub fn check(&self) -> Option<ErrorKind> {
        let failure = RULES
            .iter()
            .find(|(_, violated)| violated(self))
            .map(|(kind, _)| *kind);

        if let Some(kind) = failure {
            debug!(code = kind.code(), "receipt validation failed");
        }
        failure
    }
}

/// Validates a snapshot and its derived values.
///
/// Returns `None` when every rule passes. Pure and idempotent: it is called
/// on submit and again before every export.
pub fn validate(
    billed_to: &str,
    date_from: &str,
    date_to: &str,
    total_days: i64,
    billable_days: i64,
    line_items: &[LineItem],
) -> Option<ErrorKind> {
    ValidationInput {
        billed_to,
        date_from,
        date_to,
        total_days,
        billable_days,
        line_items,
    }
    .check()
}

// =============================================================================
// Unit Tests
// =============================================================================
