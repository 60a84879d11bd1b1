// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration validation
//!
//! Validation never fails: every problem becomes a [`ValidationError`] in the
//! returned list, and an empty list means the configuration is usable.

use std::path::PathBuf;
use thiserror::Error;

use super::OcrApiConfig;

/// A problem found in an otherwise loadable configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Server port outside [`VALID_PORT_RANGE`](super::VALID_PORT_RANGE)
    #[error("Port {port} is not in the valid range (1024-65535)")]
    PortOutOfRange { port: u32 },

    /// One or more required model/asset files are absent
    #[error("Missing required files: {}", join_paths(.files))]
    MissingFiles { files: Vec<PathBuf> },
}

fn join_paths(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run the port check, then the required-file check
pub fn validate(config: &OcrApiConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !config.server.port_in_range() {
        errors.push(ValidationError::PortOutOfRange {
            port: config.server.port,
        });
    }

    let missing = config.find_missing_required_files();
    if !missing.is_empty() {
        errors.push(ValidationError::MissingFiles { files: missing });
    }

    errors
}
