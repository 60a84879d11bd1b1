// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Args;
use std::io::Write;
use tracing::{info, warn};

use crate::config::OcrApiConfig;
use crate::console::Console;

/// Result of a command, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The configuration has problems
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Arguments for url command
#[derive(Args, Debug, Clone)]
pub struct UrlArgs {
    /// Endpoint name (ocr, health, info) or a literal path suffix
    pub endpoint: String,
}

/// Validate and, when valid, print the configuration
pub fn run_check<W: Write>(config: &OcrApiConfig, console: &mut Console<W>) -> Outcome {
    let errors = config.validate();

    if !errors.is_empty() {
        console.write_line("❌ Configuration validation failed:");
        for error in &errors {
            warn!("Configuration problem: {}", error);
            console.write_line(&format!("  - {}", error));
        }
        return Outcome::Failed;
    }

    info!("Configuration validated ({})", config.base_url());
    console.write_line("✅ Configuration validation passed");
    console.write_line("");
    console.write_line("📋 Configuration:");
    console.write_block(&config.snapshot().to_pretty_json());
    Outcome::Success
}

/// Print the configuration snapshot as JSON
pub fn run_show<W: Write>(config: &OcrApiConfig, console: &mut Console<W>) -> Outcome {
    console.write_block(&config.snapshot().to_pretty_json());
    Outcome::Success
}

pub fn run_url<W: Write>(config: &OcrApiConfig, args: &UrlArgs, console: &mut Console<W>) -> Outcome {
    console.write_line(&config.build_api_url(&args.endpoint));
    Outcome::Success
}

/// List sample image paths, one per line
pub fn run_images<W: Write>(config: &OcrApiConfig, console: &mut Console<W>) -> Outcome {
    for path in config.list_test_image_paths() {
        console.write_line(&path.display().to_string());
    }
    Outcome::Success
}

/// List missing required files; fails when there are any
pub fn run_missing<W: Write>(config: &OcrApiConfig, console: &mut Console<W>) -> Outcome {
    let missing = config.find_missing_required_files();
    for path in &missing {
        console.write_line(&path.display().to_string());
    }

    if missing.is_empty() {
        Outcome::Success
    } else {
        warn!("{} required file(s) missing", missing.len());
        Outcome::Failed
    }
}
