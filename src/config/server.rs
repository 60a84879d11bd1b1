// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API server and request timeout settings

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

use super::env::{bool_var, parse_var, string_var};
use super::error::ConfigResult;

/// Ports outside this range are reported by validation
pub const VALID_PORT_RANGE: RangeInclusive<u32> = 1024..=65535;

/// API server configuration
///
/// `port` is deliberately wider than `u16` so an out-of-range value from a
/// file or environment survives loading and is reported by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host name the API server is reached at
    pub host: String,
    /// TCP port of the API server
    pub port: u32,
    /// Debug mode flag passed to the server
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Base URL of the API, e.g. `http://localhost:8080`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Whether the port lies in [`VALID_PORT_RANGE`]
    pub fn port_in_range(&self) -> bool {
        VALID_PORT_RANGE.contains(&self.port)
    }

    pub(crate) fn apply_env<F>(&mut self, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = string_var(lookup, "SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = parse_var(lookup, "SERVER_PORT")? {
            self.port = port;
        }
        if let Some(debug) = bool_var(lookup, "SERVER_DEBUG")? {
            self.debug = debug;
        }
        Ok(())
    }
}

/// Client-side timeouts used when talking to the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// OCR request timeout in seconds
    pub request_timeout_secs: u64,
    /// Health check timeout in seconds
    pub health_check_timeout_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            health_check_timeout_secs: 5,
        }
    }
}

impl TimeoutConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get health check timeout as Duration
    pub fn health_check_timeout(&self) -> Duration {
        Duration::from_secs(self.health_check_timeout_secs)
    }

    pub(crate) fn apply_env<F>(&mut self, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secs) = parse_var(lookup, "REQUEST_TIMEOUT")? {
            self.request_timeout_secs = secs;
        }
        if let Some(secs) = parse_var(lookup, "HEALTH_CHECK_TIMEOUT")? {
            self.health_check_timeout_secs = secs;
        }
        Ok(())
    }
}
