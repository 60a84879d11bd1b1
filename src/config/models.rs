// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! PaddleOCR model file locations
//!
//! Paths are kept relative, exactly as declared, and resolved against the
//! project root only when probed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::env::string_var;

/// Model and asset files the OCR service needs at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPaths {
    /// Text detection model (ONNX)
    pub detection_model: PathBuf,
    /// Text recognition model (ONNX)
    pub recognition_model: PathBuf,
    /// Character dictionary for the recognizer
    pub charset_file: PathBuf,
    /// Font used to render recognized text
    pub font_file: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            detection_model: PathBuf::from("models/det.onnx"),
            recognition_model: PathBuf::from("models/rec.onnx"),
            charset_file: PathBuf::from("models/ppocr_keys_v1.txt"),
            font_file: PathBuf::from("assets/fonts/simfang.ttf"),
        }
    }
}

impl ModelPaths {
    /// Required files in check order: detection, recognition, charset, font
    pub fn required_files(&self) -> [&PathBuf; 4] {
        [
            &self.detection_model,
            &self.recognition_model,
            &self.charset_file,
            &self.font_file,
        ]
    }

    pub(crate) fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = string_var(lookup, "DET_MODEL_PATH") {
            self.detection_model = PathBuf::from(path);
        }
        if let Some(path) = string_var(lookup, "REC_MODEL_PATH") {
            self.recognition_model = PathBuf::from(path);
        }
        if let Some(path) = string_var(lookup, "OCR_KEYS_PATH") {
            self.charset_file = PathBuf::from(path);
        }
        if let Some(path) = string_var(lookup, "FONT_PATH") {
            self.font_file = PathBuf::from(path);
        }
    }
}
