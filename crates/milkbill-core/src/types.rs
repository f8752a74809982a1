//! # Domain Types
//!
//! Core data model of the receipt calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (raw strings, as typed)        OUTPUT (derived, recomputed)      │
//! │  ┌─────────────────┐                  ┌─────────────────┐               │
//! │  │  ReceiptForm    │                  │    LineItem     │               │
//! │  │  ─────────────  │   build_line_    │  ─────────────  │               │
//! │  │  billed_to      │   items()   ───► │  label          │               │
//! │  │  date_from/to   │                  │  quantity       │               │
//! │  │  skipped_days   │                  │  unit_price     │               │
//! │  │  tax_rate       │                  │  line_total     │               │
//! │  │  cow ──────┐    │                  └─────────────────┘               │
//! │  │  buffalo ──┤    │                  ┌─────────────────┐               │
//! │  └────────────┼────┘   compute_       │  ReceiptTotals  │               │
//! │               ▼        totals()  ───► │  subtotal, tax  │               │
//! │  ┌─────────────────┐                  │  total, days    │               │
//! │  │  LineItemRow    │                  └─────────────────┘               │
//! │  │  enabled, label │                                                    │
//! │  │  quantity/price │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `ReceiptForm` is an immutable copy of the form at one instant. Every
//! recomputation reads a fresh snapshot and produces fresh output values;
//! nothing is ever updated in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::days::default_billing_period;
use crate::money::Rupees;
use crate::{DEFAULT_BUFFALO_PRICE, DEFAULT_COW_PRICE};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a percentage (5.0 = 5%).
///
/// Negative and non-finite rates clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a tax rate from a percentage.
    pub fn from_percentage(pct: f64) -> Self {
        if pct.is_finite() && pct > 0.0 {
            TaxRate(pct)
        } else {
            TaxRate(0.0)
        }
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> f64 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Milk Kind
// =============================================================================

/// The two kinds of milk the receipt can bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MilkKind {
    Cow,
    Buffalo,
}

impl MilkKind {
    /// Both kinds, in receipt order.
    pub const ALL: [MilkKind; 2] = [MilkKind::Cow, MilkKind::Buffalo];

    /// Line item label printed on the receipt.
    pub const fn label(&self) -> &'static str {
        match self {
            MilkKind::Cow => "Milk (cow)",
            MilkKind::Buffalo => "Milk (buffalo)",
        }
    }

    /// Price per litre the form is prefilled with.
    pub const fn default_price(&self) -> f64 {
        match self {
            MilkKind::Cow => DEFAULT_COW_PRICE,
            MilkKind::Buffalo => DEFAULT_BUFFALO_PRICE,
        }
    }
}

// =============================================================================
// Line Item Row (raw input)
// =============================================================================

/// One milk row of the form, exactly as entered.
///
/// Quantity and price stay raw strings here. They are coerced by
/// [`build_line_items`](crate::line_items::build_line_items), never earlier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRow {
    /// Whether the row's checkbox is ticked.
    pub enabled: bool,
    /// Label printed on the receipt.
    pub label: String,
    /// Litres delivered, raw.
    pub quantity: String,
    /// Price per litre, raw.
    pub unit_price: String,
}

impl LineItemRow {
    pub fn new(
        enabled: bool,
        label: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        LineItemRow {
            enabled,
            label: label.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }

    /// A disabled row for `kind`, prefilled with its default price
    /// (`"65.00"` for cow).
    pub fn for_kind(kind: MilkKind) -> Self {
        LineItemRow::new(
            false,
            kind.label(),
            "",
            format!("{:.2}", kind.default_price()),
        )
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A priced receipt row. Only built for enabled rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: String,
    /// Litres, clamped to >= 0.
    pub quantity: f64,
    /// Price per litre, clamped to >= 0.
    pub unit_price: Rupees,
    /// `quantity × unit_price`, unrounded.
    pub line_total: Rupees,
}

// =============================================================================
// Receipt Totals
// =============================================================================

/// Everything derived from the numeric inputs of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptTotals {
    pub subtotal: Rupees,
    pub tax_rate: TaxRate,
    pub tax_amount: Rupees,
    pub total: Rupees,
    /// Inclusive length of the billing period; 0 if the period is invalid.
    pub total_days: i64,
    /// `max(0, total_days - skipped_days)`.
    pub billable_days: i64,
}

// =============================================================================
// Receipt Form (snapshot)
// =============================================================================

/// Immutable snapshot of every field on the receipt form.
///
/// Dates are `YYYY-MM-DD` strings (empty when unset), numbers are whatever
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptForm {
    pub billed_to: String,
    pub date_from: String,
    pub date_to: String,
    pub skipped_days: String,
    pub tax_rate: String,
    pub cow: LineItemRow,
    pub buffalo: LineItemRow,
}

impl ReceiptForm {
    /// The form as it first appears.
    ///
    /// ## Defaults
    /// - Billing period: the whole month before `today`
    /// - Prices: cow 65.00, buffalo 70.00 (both rows unticked)
    /// - Skipped days and tax rate: 0
    pub fn with_defaults(today: NaiveDate) -> Self {
        let period = default_billing_period(today);
        ReceiptForm {
            billed_to: String::new(),
            date_from: period.from.format("%Y-%m-%d").to_string(),
            date_to: period.to.format("%Y-%m-%d").to_string(),
            skipped_days: "0".to_string(),
            tax_rate: "0".to_string(),
            cow: LineItemRow::for_kind(MilkKind::Cow),
            buffalo: LineItemRow::for_kind(MilkKind::Buffalo),
        }
    }

    /// The milk rows in receipt order.
    pub fn rows(&self) -> [&LineItemRow; 2] {
        [&self.cow, &self.buffalo]
    }

    /// Mutable access to the row for `kind`, for building snapshots.
    pub fn row_mut(&mut self, kind: MilkKind) -> &mut LineItemRow {
        match kind {
            MilkKind::Cow => &mut self.cow,
            MilkKind::Buffalo => &mut self.buffalo,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
