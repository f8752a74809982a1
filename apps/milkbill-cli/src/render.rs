//! Plain-text layout of a [`ReceiptPreview`].

use milkbill_core::ReceiptPreview;

/// Width of the receipt in characters.
pub const RECEIPT_WIDTH: usize = 56;

/// Lays the preview out as a fixed-width text receipt.
///
/// ```text
/// MILK DELIVERY RECEIPT
/// Billed to: Asha
/// Period:    01 Feb 2024 - 29 Feb 2024
/// ...
/// Item              Qty        Rate         Amount
/// Milk (cow)        10.00 L    Rs. 65.00    Rs. 650.00
/// ```
pub fn render_text(preview: &ReceiptPreview) -> String {
    let rule = "-".repeat(RECEIPT_WIDTH);

    let mut lines = vec![
        "MILK DELIVERY RECEIPT".to_string(),
        format!("Billed to: {}", preview.billed_to),
        format!("Period:    {}", preview.date_range),
        preview.skipped.clone(),
        format!("Pay by:    {}", preview.pay_by_date),
        rule.clone(),
        table_row("Item", "Qty", "Rate", "Amount"),
    ];
    lines.extend(
        preview
            .rows
            .iter()
            .map(|row| table_row(&row.label, &row.quantity, &row.unit_price, &row.line_total)),
    );
    lines.push(rule.clone());
    lines.push(total_row("Subtotal", &preview.subtotal));
    lines.push(total_row("Tax", &preview.tax));
    lines.push(total_row("Total", &preview.total));

    if let Some(message) = &preview.error_message {
        lines.push(rule);
        lines.push(format!("! {message}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn table_row(label: &str, quantity: &str, rate: &str, amount: &str) -> String {
    format!("{label:<16} {quantity:>10} {rate:>12} {amount:>14}")
}

fn total_row(label: &str, amount: &str) -> String {
    format!("{label:<40}{amount:>16}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use milkbill_core::{calculate, ReceiptForm};

    fn preview(billed_to: &str) -> ReceiptPreview {
        let today = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let mut form = ReceiptForm::with_defaults(today);
        form.billed_to = billed_to.to_string();
        form.cow.enabled = true;
        form.cow.quantity = "10".to_string();
        ReceiptPreview::render(&form, &calculate(&form), today)
    }

    #[test]
    fn test_render_valid() {
        let text = render_text(&preview("Asha"));
        assert!(text.starts_with("MILK DELIVERY RECEIPT\n"));
        assert!(text.contains("Billed to: Asha"));
        assert!(text.contains("Period:    01 Feb 2024 - 29 Feb 2024"));
        assert!(text.contains("Pay by:    05 Mar 2024"));
        assert!(text.contains("Milk (cow)"));
        assert!(text.contains("Rs. 650.00"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_render_shows_error() {
        let text = render_text(&preview(""));
        assert!(text.contains("! Please enter the billed-to name."));
    }

    #[test]
    fn test_render_every_line_ends_with_newline() {
        let text = render_text(&preview("Asha"));
        assert!(text.ends_with("Rs. 650.00\n"));
        assert!(!text.contains("\n\n"));
        let totals: Vec<&str> = text.lines().filter(|l| l.starts_with("Total")).collect();
        assert_eq!(totals, vec![format!("{:<40}{:>16}", "Total", "Rs. 650.00")]);
    }
}
