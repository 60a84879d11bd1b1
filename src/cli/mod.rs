// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod commands;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::OcrApiConfig;
use crate::console::Console;

pub use commands::{Outcome, UrlArgs};

/// OCR API configuration self-check
#[derive(Parser, Debug)]
#[command(name = "ocr-config")]
#[command(version)]
#[command(about = "Validate and inspect the OCR API service configuration", long_about = None)]
pub struct Cli {
    /// TOML config file layered between defaults and environment overrides
    #[arg(long, short, env = "OCR_CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and print it when valid (default)
    Check,

    /// Print the configuration snapshot as JSON
    Show,

    /// Print the full URL of an endpoint
    Url(UrlArgs),

    /// List the sample image paths
    Images,

    /// List required model files that are missing
    Missing,
}

/// Execute CLI command
pub fn execute<W: Write>(
    command: Option<&Commands>,
    config: &OcrApiConfig,
    console: &mut Console<W>,
) -> Outcome {
    let outcome = match command.unwrap_or(&Commands::Check) {
        Commands::Check => commands::run_check(config, console),
        Commands::Show => commands::run_show(config, console),
        Commands::Url(args) => commands::run_url(config, args, console),
        Commands::Images => commands::run_images(config, console),
        Commands::Missing => commands::run_missing(config, console),
    };
    console.flush();
    outcome
}
