//! # Commands
//!
//! One function per subcommand. Each builds a fresh form snapshot from the
//! flags and hands it to `milkbill-core`; nothing here does arithmetic.
//!
//! ```text
//!  preview  ──► calculate ──► ReceiptPreview ──► stdout (text | JSON)
//!  validate ──► calculate ──► validate ──────► stdout, exit 1 if invalid
//!  export   ──► ExportPlan::prepare ─────────► <out-dir>/<stem>.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use milkbill_core::{calculate, Calculation, ExportPlan, ReceiptPreview};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Command, ExportArgs, FormArgs, PreviewArgs};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::render::render_text;

/// Outcome of a command, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Invalid,
}

/// JSON body of `preview --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewOutput<'a> {
    calculation: &'a Calculation,
    preview: &'a ReceiptPreview,
}

/// Dispatches a parsed command.
pub fn run(command: &Command, config: &AppConfig) -> CliResult<Outcome> {
    match command {
        Command::Preview(args) => preview(args, config),
        Command::Validate(form) => validate(form, config),
        Command::Export(args) => export(args, config).map(|path| {
            println!("Saved receipt to {}", path.display());
            Outcome::Ok
        }),
    }
}

fn today(form: &FormArgs) -> NaiveDate {
    form.today.unwrap_or_else(|| Local::now().date_naive())
}

fn preview(args: &PreviewArgs, config: &AppConfig) -> CliResult<Outcome> {
    let today = today(&args.form);
    let form = args.form.to_form(config, today);
    let calculation = calculate(&form);
    let preview = ReceiptPreview::render(&form, &calculation, today);

    if args.json {
        let output = PreviewOutput {
            calculation: &calculation,
            preview: &preview,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_text(&preview));
    }

    Ok(Outcome::Ok)
}

fn validate(args: &FormArgs, config: &AppConfig) -> CliResult<Outcome> {
    let form = args.to_form(config, today(args));
    let calculation = calculate(&form);

    match calculation.validate(&form) {
        None => {
            println!("OK");
            Ok(Outcome::Ok)
        }
        Some(kind) => {
            warn!(code = kind.code(), "receipt is not valid");
            println!("{kind}");
            Ok(Outcome::Invalid)
        }
    }
}

/// Validates the form and writes the text receipt. Returns the written path.
pub fn export(args: &ExportArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let today = today(&args.form);
    let form = args.form.to_form(config, today);
    let plan = ExportPlan::prepare(&form, today)?;

    let out_dir = args.out_dir.as_deref().unwrap_or(&config.output_dir);
    let path = write_receipt(out_dir, &plan)?;

    info!(path = %path.display(), "receipt exported");
    Ok(path)
}

fn write_receipt(out_dir: &Path, plan: &ExportPlan) -> CliResult<PathBuf> {
    let path = out_dir.join(format!("{}.txt", plan.file_stem));

    fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, render_text(&plan.preview)).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use milkbill_core::{CoreError, ErrorKind};

    fn form_args(billed_to: &str) -> FormArgs {
        FormArgs {
            billed_to: billed_to.to_string(),
            skipped: "0".to_string(),
            cow: Some("10".to_string()),
            today: NaiveDate::from_ymd_opt(2024, 3, 18),
            ..FormArgs::default()
        }
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            form: form_args("My Name / Co."),
            out_dir: Some(dir.path().join("receipts")),
        };

        let path = export(&args, &AppConfig::default()).unwrap();
        assert_eq!(path, dir.path().join("receipts").join("my-name-co.txt"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Billed to: My Name / Co."));
        assert!(text.contains("Rs. 650.00"));
    }

    #[test]
    fn test_export_refuses_invalid_form() {
        let dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            form: form_args("   "),
            out_dir: Some(dir.path().to_path_buf()),
        };

        let err = export(&args, &AppConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Receipt(CoreError::Invalid(ErrorKind::MissingBilledTo))
        ));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_validate_outcome() {
        let config = AppConfig::default();
        assert_eq!(validate(&form_args("Asha"), &config).unwrap(), Outcome::Ok);
        assert_eq!(validate(&form_args(""), &config).unwrap(), Outcome::Invalid);
    }
}
