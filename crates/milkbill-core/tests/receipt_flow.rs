//! End-to-end receipt flow through the public API.

use chrono::NaiveDate;
use milkbill_core::{
    build_line_items, calculate, compute_totals, days_between_inclusive, sanitize_filename,
    validate, ErrorKind, ExportPlan, LineItemRow, MilkKind, ReceiptForm, ReceiptPreview,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
}

fn cow_only(quantity: &str, price: &str) -> Vec<LineItemRow> {
    vec![
        LineItemRow::new(true, MilkKind::Cow.label(), quantity, price),
        LineItemRow::new(false, MilkKind::Buffalo.label(), "", "70.00"),
    ]
}

#[test]
fn test_january_is_thirty_one_days() {
    assert_eq!(days_between_inclusive("2024-01-01", "2024-01-31"), 31);
}

#[test]
fn test_every_single_day_counts_once() {
    for day in ["2024-01-01", "2024-02-29", "2023-12-31"] {
        assert_eq!(days_between_inclusive(day, day), 1, "{day}");
    }
}

#[test]
fn test_cow_row_prices_to_650() {
    let items = build_line_items(&cow_only("10", "65"));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].line_total.value(), 650.0);
}

#[test]
fn test_two_rows_with_five_percent_tax() {
    let rows = [
        LineItemRow::new(true, MilkKind::Cow.label(), "10", "65"),
        LineItemRow::new(true, MilkKind::Buffalo.label(), "4", "70"),
    ];
    let totals = compute_totals(&build_line_items(&rows), 5.0, 31, 0);
    assert_eq!(totals.subtotal.value(), 930.0);
    assert_eq!(totals.tax_amount.value(), 46.5);
    assert_eq!(totals.total.value(), 976.5);
}

#[test]
fn test_blank_name_takes_precedence() {
    let items = build_line_items(&cow_only("10", "65"));
    assert_eq!(
        validate("", "2024-02-01", "2024-02-28", 28, 28, &items),
        Some(ErrorKind::MissingBilledTo)
    );
}

#[test]
fn test_asha_receipt_is_valid() {
    let from = "2024-02-01";
    let to = "2024-02-28";
    let items = build_line_items(&cow_only("10", "65"));
    let total_days = days_between_inclusive(from, to);
    let totals = compute_totals(&items, 0.0, total_days, 0);

    assert_eq!(total_days, 28);
    assert_eq!(
        validate("Asha", from, to, totals.total_days, totals.billable_days, &items),
        None
    );
}

#[test]
fn test_filename_from_company_name() {
    assert_eq!(sanitize_filename("My Name / Co."), "my-name-co");
}

#[test]
fn test_form_snapshot_to_export() {
    let mut form = ReceiptForm::with_defaults(today());
    form.billed_to = "Asha".to_string();
    form.tax_rate = "5".to_string();
    form.cow.enabled = true;
    form.cow.quantity = "10".to_string();
    form.buffalo.enabled = true;
    form.buffalo.quantity = "4".to_string();

    let calc = calculate(&form);
    let preview = ReceiptPreview::render(&form, &calc, today());
    assert_eq!(preview.total, "Rs. 976.50");
    assert_eq!(preview.error_message, None);

    let plan = ExportPlan::prepare(&form, today()).unwrap();
    assert_eq!(plan.file_stem, "asha");
    assert_eq!(plan.preview, preview);
}

#[test]
fn test_reversed_dates_block_export() {
    let mut form = ReceiptForm::with_defaults(today());
    form.billed_to = "Asha".to_string();
    form.date_from = "2024-02-10".to_string();
    form.date_to = "2024-02-01".to_string();
    form.cow.enabled = true;
    form.cow.quantity = "10".to_string();

    let err = ExportPlan::prepare(&form, today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDateOrder);
    assert_eq!(err.to_string(), "Date To must be after or equal to Date From.");
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let form = ReceiptForm::with_defaults(today());
    let json = serde_json::to_string(&form).unwrap();
    let back: ReceiptForm = serde_json::from_str(&json).unwrap();
    assert_eq!(back, form);
}
