//! # milkbill
//!
//! Command-line front end for the milk-delivery receipt calculator.
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (logging)
//! 3. Load configuration from the environment
//! 4. Run the subcommand
//!
//! ## Exit Codes
//! - 0: success
//! - 1: the form failed validation, or an error occurred

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::Outcome;
use crate::config::AppConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::from_env()?;
    debug!(?config, "configuration loaded");

    match commands::run(&cli.command, &config)? {
        Outcome::Ok => Ok(ExitCode::SUCCESS),
        Outcome::Invalid => Ok(ExitCode::FAILURE),
    }
}
