use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use milkbill_core::{MilkKind, ReceiptForm};

use crate::config::AppConfig;

/// Milk-delivery receipt calculator.
#[derive(Parser)]
#[command(name = "milkbill", version, about = "Milk-delivery receipt calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the receipt preview.
    Preview(PreviewArgs),
    /// Check the form and print the first problem, if any.
    Validate(FormArgs),
    /// Validate and write the receipt to `<out-dir>/<billed-to>.txt`.
    Export(ExportArgs),
}

/// Arguments for the `preview` subcommand.
#[derive(clap::Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the calculation and preview as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Directory to write the receipt to (default: MILKBILL_OUTPUT_DIR or .).
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// The receipt form fields. Numbers are taken as typed and coerced by the
/// core, exactly like the web form.
#[derive(clap::Args, Debug, Default)]
pub struct FormArgs {
    /// Customer name printed on the receipt.
    #[arg(short, long, default_value = "")]
    pub billed_to: String,

    /// First day of the billing period (YYYY-MM-DD, default: start of last month).
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of the billing period (YYYY-MM-DD, default: end of last month).
    #[arg(long)]
    pub to: Option<String>,

    /// Days without delivery.
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub skipped: String,

    /// Tax rate in percent (default: MILKBILL_TAX_RATE or 0).
    #[arg(short, long, allow_hyphen_values = true)]
    pub tax_rate: Option<String>,

    /// Litres of cow milk; giving it selects the cow row.
    #[arg(long, allow_hyphen_values = true)]
    pub cow: Option<String>,

    /// Cow milk price per litre (default: MILKBILL_COW_PRICE or 65.00).
    #[arg(long, allow_hyphen_values = true)]
    pub cow_price: Option<String>,

    /// Litres of buffalo milk; giving it selects the buffalo row.
    #[arg(long, allow_hyphen_values = true)]
    pub buffalo: Option<String>,

    /// Buffalo milk price per litre (default: MILKBILL_BUFFALO_PRICE or 70.00).
    #[arg(long, allow_hyphen_values = true)]
    pub buffalo_price: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl FormArgs {
    /// Builds the form snapshot these flags describe.
    pub fn to_form(&self, config: &AppConfig, today: NaiveDate) -> ReceiptForm {
        let mut form = ReceiptForm::with_defaults(today);

        form.billed_to = self.billed_to.clone();
        if let Some(from) = &self.from {
            form.date_from = from.clone();
        }
        if let Some(to) = &self.to {
            form.date_to = to.clone();
        }
        form.skipped_days = self.skipped.clone();
        form.tax_rate = self
            .tax_rate
            .clone()
            .unwrap_or_else(|| config.tax_rate.to_string());

        for kind in MilkKind::ALL {
            let (quantity, price) = match kind {
                MilkKind::Cow => (&self.cow, &self.cow_price),
                MilkKind::Buffalo => (&self.buffalo, &self.buffalo_price),
            };
            let row = form.row_mut(kind);
            row.unit_price = price
                .clone()
                .unwrap_or_else(|| format!("{:.2}", config.price_of(kind)));
            if let Some(quantity) = quantity {
                row.enabled = true;
                row.quantity = quantity.clone();
            }
        }

        form
    }
}
