// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sample images used to exercise the OCR endpoint

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::env::{list_var, string_var};

/// Ordered sample image names plus the directory holding them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestImageSet {
    /// Directory relative to the project root
    pub images_dir: PathBuf,
    /// File names, in the order they should be used
    pub images: Vec<String>,
}

impl Default for TestImageSet {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("assets/images"),
            images: vec!["1.jpg".to_string(), "11.jpg".to_string(), "12.jpg".to_string()],
        }
    }
}

impl TestImageSet {
    /// `root/images_dir/filename`, without checking that it exists
    pub fn resolve(&self, root: &Path, filename: &str) -> PathBuf {
        root.join(&self.images_dir).join(filename)
    }

    /// Every image resolved against `root`, in declared order
    pub fn resolve_all(&self, root: &Path) -> Vec<PathBuf> {
        self.images
            .iter()
            .map(|name| self.resolve(root, name))
            .collect()
    }

    pub(crate) fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = string_var(lookup, "TEST_IMAGES_DIR") {
            self.images_dir = PathBuf::from(dir);
        }
        if let Some(images) = list_var(lookup, "TEST_IMAGES") {
            self.images = images;
        }
    }
}
