//! # Export Plan
//!
//! Decides what gets exported and under which name. Writing the file is the
//! caller's job; this module stays pure.
//!
//! ```text
//! export requested
//!      │
//!      ▼
//! calculate(form) ──► validate ── fails ──► CoreError::Invalid(kind)
//!      │
//!      ▼ passes
//! sanitize_filename(billed_to) ──► ExportPlan { file_stem, preview, .. }
//! ```

use chrono::NaiveDate;
use tracing::info;

use crate::error::CoreResult;
use crate::filename::sanitize_filename;
use crate::receipt::{calculate, Calculation, ReceiptPreview};
use crate::types::ReceiptForm;

/// A validated receipt, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    /// Filename without extension, derived from the billed-to name.
    pub file_stem: String,
    pub calculation: Calculation,
    pub preview: ReceiptPreview,
}

impl ExportPlan {
    /// Recomputes and validates `form`, then names the export.
    ///
    /// ## Errors
    /// Returns [`CoreError::Invalid`](crate::error::CoreError::Invalid) with
    /// the first failed rule when the snapshot is not exportable.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use milkbill_core::{ErrorKind, ExportPlan, ReceiptForm};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    /// let mut form = ReceiptForm::with_defaults(today);
    ///
    /// let err = ExportPlan::prepare(&form, today).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::MissingBilledTo);
    ///
    /// form.billed_to = "Asha Devi".into();
    /// form.cow.enabled = true;
    /// form.cow.quantity = "30".into();
    /// let plan = ExportPlan::prepare(&form, today).unwrap();
    /// assert_eq!(plan.file_stem, "asha-devi");
    /// ```
    pub fn prepare(form: &ReceiptForm, today: NaiveDate) -> CoreResult<Self> {
        let calculation = calculate(form);
        if let Some(kind) = calculation.validate(form) {
            return Err(kind.into());
        }

        let preview = ReceiptPreview::render(form, &calculation, today);
        let file_stem = sanitize_filename(&form.billed_to);

        info!(%file_stem, total = %calculation.totals.total, "receipt ready for export");

        Ok(ExportPlan {
            file_stem,
            calculation,
            preview,
        })
    }
}
