// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use ocr_api_config::{
    cli::{execute, Cli},
    config::OcrApiConfig,
    console::{self, Console},
    logging, version,
};

fn main() {
    // Must run before anything writes to the terminal
    console::init_output_encoding();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let mut stderr = Console::new(std::io::stderr(), console::init_output_encoding());
            stderr.write_line(&format!("❌ Error: {:#}", e));
            std::process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    // .env is optional
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = OcrApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("{}", version::get_version_string());
    tracing::debug!("Project root: {}", config.project_root.display());

    let mut stdout = Console::stdout();
    let outcome = execute(cli.command.as_ref(), &config, &mut stdout);
    Ok(outcome.exit_code())
}
