//! # Configuration
//!
//! CLI configuration, loaded from environment variables with fallback to
//! defaults.
//!
//! ## Environment Variables
//! - `MILKBILL_COW_PRICE`: default cow milk price per litre (e.g. "68")
//! - `MILKBILL_BUFFALO_PRICE`: default buffalo milk price per litre
//! - `MILKBILL_TAX_RATE`: default tax rate in percent (e.g. "5")
//! - `MILKBILL_OUTPUT_DIR`: where `export` writes receipts
//!
//! Command-line flags override all of these.

use std::env;
use std::path::PathBuf;

use milkbill_core::MilkKind;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Price per litre of cow milk when `--cow-price` is not given
    pub cow_price: f64,

    /// Price per litre of buffalo milk when `--buffalo-price` is not given
    pub buffalo_price: f64,

    /// Tax rate in percent when `--tax-rate` is not given
    pub tax_rate: f64,

    /// Export directory when `--out-dir` is not given
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            cow_price: MilkKind::Cow.default_price(),
            buffalo_price: MilkKind::Buffalo.default_price(),
            tax_rate: 0.0,
            output_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, so tests need not touch the
    /// real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        Ok(AppConfig {
            cow_price: parse_rate(&lookup, "MILKBILL_COW_PRICE", defaults.cow_price)?,
            buffalo_price: parse_rate(&lookup, "MILKBILL_BUFFALO_PRICE", defaults.buffalo_price)?,
            tax_rate: parse_rate(&lookup, "MILKBILL_TAX_RATE", defaults.tax_rate)?,
            output_dir: lookup("MILKBILL_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        })
    }

    /// Configured price for `kind`.
    pub fn price_of(&self, kind: MilkKind) -> f64 {
        match kind {
            MilkKind::Cow => self.cow_price,
            MilkKind::Buffalo => self.buffalo_price,
        }
    }
}

/// Reads a non-negative number. Unlike form input, a bad value here is an
/// operator mistake and is reported instead of coerced.
fn parse_rate<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(ConfigError::InvalidValue(key.to_string())),
        },
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
