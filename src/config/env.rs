// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment variable helpers for configuration overrides
//!
//! All readers take a lookup function instead of touching `std::env`
//! directly, so tests can feed a plain map.

use std::fmt::Display;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};

/// Read a variable, treating empty values as unset
pub fn string_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// Read and parse a variable with `FromStr`
pub fn parse_var<F, T>(lookup: &F, key: &str) -> ConfigResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match string_var(lookup, key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::invalid(key, &raw, e)),
        None => Ok(None),
    }
}

/// Read a boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`)
pub fn bool_var<F>(lookup: &F, key: &str) -> ConfigResult<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = string_var(lookup, key) else {
        return Ok(None);
    };

    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::invalid(key, &raw, "expected a boolean")),
    }
}

/// Read a comma-separated list, dropping empty items
pub fn list_var<F>(lookup: &F, key: &str) -> Option<Vec<String>>
where
    F: Fn(&str) -> Option<String>,
{
    string_var(lookup, key).map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}
