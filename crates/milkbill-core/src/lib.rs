//! # milkbill-core: Pure Receipt Logic for milkbill
//!
//! This crate is the calculation core behind the milk-delivery receipt form.
//! Everything here is a pure function of an immutable form snapshot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        milkbill Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front end (web form / milkbill CLI)                │   │
//! │  │    Billing period ──► Milk rows ──► Tax ──► Preview / Export    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ReceiptForm snapshot                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ milkbill-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   days    │  │ line_items │  │  totals   │  │ validation│  │   │
//! │  │   │ inclusive │  │  clamp &   │  │ subtotal  │  │  ordered  │  │   │
//! │  │   │  counting │  │   price    │  │ tax/total │  │   rules   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   receipt (preview model) · export (file stem) · format        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Data model (ReceiptForm, LineItem, ReceiptTotals, MilkKind)
//! - [`money`] - Rupee amounts and their display format
//! - [`input`] - Clamp-and-default coercion of raw form strings
//! - [`days`] - Inclusive day counting over a billing period
//! - [`line_items`] - Builds priced line items from the milk rows
//! - [`totals`] - Subtotal, tax and billable days
//! - [`validation`] - First-failure-wins validation chain
//! - [`filename`] - Export filename sanitizer
//! - [`format`] - Date and quantity display formatting
//! - [`receipt`] - Full recomputation and the preview view model
//! - [`export`] - Validated export plan
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use milkbill_core::{build_line_items, compute_totals, LineItemRow};
//!
//! let rows = [
//!     LineItemRow::new(true, "Milk (cow)", "10", "65"),
//!     LineItemRow::new(true, "Milk (buffalo)", "4", "70"),
//! ];
//! let items = build_line_items(&rows);
//! let totals = compute_totals(&items, 5.0, 31, 0);
//!
//! assert_eq!(totals.subtotal.value(), 930.0);
//! assert_eq!(totals.tax_amount.value(), 46.5);
//! assert_eq!(totals.total.value(), 976.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod days;
pub mod error;
pub mod export;
pub mod filename;
pub mod format;
pub mod input;
pub mod line_items;
pub mod money;
pub mod receipt;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use days::{days_between_inclusive, DateRange};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use export::ExportPlan;
pub use filename::sanitize_filename;
pub use line_items::build_line_items;
pub use money::Rupees;
pub use receipt::{calculate, Calculation, ReceiptPreview};
pub use totals::compute_totals;
pub use types::*;
pub use validation::{validate, ValidationInput};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Day of the month by which a receipt must be paid.
///
/// ## Business Rule
/// Always the 5th of the current month, regardless of the billing period
/// on the receipt.
pub const PAY_BY_DAY: u32 = 5;

/// Default unit price of cow milk, in rupees per litre.
pub const DEFAULT_COW_PRICE: f64 = 65.0;

/// Default unit price of buffalo milk, in rupees per litre.
pub const DEFAULT_BUFFALO_PRICE: f64 = 70.0;

/// File stem used when the billed-to name sanitizes to nothing.
pub const DEFAULT_FILE_STEM: &str = "receipt";
