// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logical endpoint names mapped to URL paths

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Endpoint name to path mapping (`ocr` -> `/ocr`, ...)
///
/// Deserialized entries are merged over the defaults, so a config file only
/// needs to list the endpoints it adds or moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EndpointMap {
    paths: BTreeMap<String, String>,
}

impl Default for EndpointMap {
    fn default() -> Self {
        let mut paths = BTreeMap::new();
        paths.insert("ocr".to_string(), "/ocr".to_string());
        paths.insert("health".to_string(), "/health".to_string());
        paths.insert("info".to_string(), "/".to_string());
        Self { paths }
    }
}

impl<'de> Deserialize<'de> for EndpointMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut map = EndpointMap::default();
        map.paths.extend(overrides);
        Ok(map)
    }
}

impl EndpointMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    /// Path for `name`, or `name` itself when it is not a known endpoint
    pub fn path_or_literal<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Add or replace an endpoint
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.paths.insert(name.into(), path.into());
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
