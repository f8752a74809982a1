//! # Error Types
//!
//! Domain-specific error types for milkbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  milkbill-core errors (this file)                                       │
//! │  ├── ErrorKind   - Which validation rule the form snapshot failed      │
//! │  └── CoreError   - Operations that refuse an invalid snapshot          │
//! │                                                                         │
//! │  milkbill-cli errors (separate crate)                                   │
//! │  └── CliError    - Config, I/O and core failures at the edge           │
//! │                                                                         │
//! │  Flow: ErrorKind → CoreError → CliError → terminal                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every `ErrorKind` displays as the message the form shows the user
//! 3. Numeric parse failures are never errors; they coerce to zero

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Kind
// =============================================================================

/// A validation failure of the receipt form.
///
/// The variants are listed in the order the validator checks them. Only the
/// first failing rule is ever reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The billed-to name is empty after trimming whitespace.
    #[error("Please enter the billed-to name.")]
    MissingBilledTo,

    /// One of the two date fields is unset.
    #[error("Please select both dates.")]
    MissingDates,

    /// The billing period is empty: `to` is before `from`, or a date does
    /// not parse.
    #[error("Date To must be after or equal to Date From.")]
    InvalidDateOrder,

    /// Skipped days consume the whole billing period.
    #[error("Skipped days cannot be more than the total days.")]
    SkippedExceedsTotal,

    /// Neither milk row is enabled.
    #[error("Please select at least one milk option.")]
    NoLineItemSelected,

    /// An enabled milk row has a zero quantity or a zero price.
    #[error("Selected milk options must have quantity and price greater than 0.")]
    InvalidLineItemValues,
}

impl ErrorKind {
    /// All kinds, in check order.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::MissingBilledTo,
        ErrorKind::MissingDates,
        ErrorKind::InvalidDateOrder,
        ErrorKind::SkippedExceedsTotal,
        ErrorKind::NoLineItemSelected,
        ErrorKind::InvalidLineItemValues,
    ];

    /// Stable machine-readable code, e.g. `"MISSING_BILLED_TO"`.
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingBilledTo => "MISSING_BILLED_TO",
            ErrorKind::MissingDates => "MISSING_DATES",
            ErrorKind::InvalidDateOrder => "INVALID_DATE_ORDER",
            ErrorKind::SkippedExceedsTotal => "SKIPPED_EXCEEDS_TOTAL",
            ErrorKind::NoLineItemSelected => "NO_LINE_ITEM_SELECTED",
            ErrorKind::InvalidLineItemValues => "INVALID_LINE_ITEM_VALUES",
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors from operations that require a valid form snapshot.
///
/// ## When This Occurs
/// ```text
/// export requested
///      │
///      ▼
/// validate(snapshot) ── Some(kind) ──► CoreError::Invalid(kind)
///      │                                    │
///      ▼ None                               ▼
/// ExportPlan                         UI shows kind's message
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The snapshot failed validation.
    #[error("{0}")]
    Invalid(#[from] ErrorKind),
}

impl CoreError {
    /// Returns the validation kind behind this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Invalid(kind) => *kind,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
