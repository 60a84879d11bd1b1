// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Log level and line format settings

use serde::{Deserialize, Serialize};
use tracing::Level;

use super::env::string_var;
use super::error::{ConfigError, ConfigResult};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level name, case-insensitive (`INFO`, `debug`, ...)
    pub level: String,
    /// Line template; understands `{time}`, `{level}`, `{target}`, `{message}`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            format: "[{time}] {message}".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed tracing level
    pub fn tracing_level(&self) -> ConfigResult<Level> {
        // tracing spells it "warn"; accept the longer form too
        let normalized = match self.level.trim().to_lowercase().as_str() {
            "warning" => "warn".to_string(),
            other => other.to_string(),
        };
        normalized
            .parse::<Level>()
            .map_err(|e| ConfigError::invalid("LOG_LEVEL", &self.level, e))
    }

    pub(crate) fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = string_var(lookup, "LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = string_var(lookup, "LOG_FORMAT") {
            self.format = format;
        }
    }
}
