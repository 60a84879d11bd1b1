// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Serializable view of the configuration for display and logging

use serde::{Deserialize, Serialize};

use super::OcrApiConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    pub host: String,
    pub port: u32,
    pub debug: bool,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsSnapshot {
    pub det_model: String,
    pub rec_model: String,
    pub ocr_keys: String,
    pub font: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSnapshot {
    pub images_dir: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrSnapshot {
    pub det_db_thresh: f64,
    pub det_db_box_thresh: f64,
    pub max_candidates: u32,
    pub unclip_ratio: f64,
    pub use_dilation: bool,
    pub drop_score: f64,
}

/// Nested snapshot with `server`, `models`, `test` and `ocr` groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub server: ServerSnapshot,
    pub models: ModelsSnapshot,
    pub test: TestSnapshot,
    pub ocr: OcrSnapshot,
}

impl ConfigSnapshot {
    pub fn from_config(config: &OcrApiConfig) -> Self {
        let models = &config.models;
        let ocr = &config.ocr;

        Self {
            server: ServerSnapshot {
                host: config.server.host.clone(),
                port: config.server.port,
                debug: config.server.debug,
                base_url: config.server.base_url(),
            },
            models: ModelsSnapshot {
                det_model: models.detection_model.display().to_string(),
                rec_model: models.recognition_model.display().to_string(),
                ocr_keys: models.charset_file.display().to_string(),
                font: models.font_file.display().to_string(),
            },
            test: TestSnapshot {
                images_dir: config.test_images.images_dir.display().to_string(),
                images: config.test_images.images.clone(),
            },
            ocr: OcrSnapshot {
                det_db_thresh: ocr.det_db_thresh,
                det_db_box_thresh: ocr.det_db_box_thresh,
                max_candidates: ocr.max_candidates,
                unclip_ratio: ocr.unclip_ratio,
                use_dilation: ocr.use_dilation,
                drop_score: ocr.drop_score,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // A struct of strings, numbers and bools always converts
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Indented JSON; non-ASCII text is written as-is, not escaped
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
