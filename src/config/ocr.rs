// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection and recognition tuning values
//!
//! Stored and reported only; nothing in this crate runs the detector.

use serde::{Deserialize, Serialize};

use super::env::{bool_var, parse_var};
use super::error::ConfigResult;

/// DB text detection and recognition parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrParameters {
    /// Binarization threshold of the DB probability map
    pub det_db_thresh: f64,
    /// Minimum mean score for a detected box
    pub det_db_box_thresh: f64,
    /// Upper bound on candidate boxes per image
    pub max_candidates: u32,
    /// Polygon expansion factor applied to detected boxes
    pub unclip_ratio: f64,
    pub use_dilation: bool,
    /// Recognition results below this confidence are dropped
    pub drop_score: f64,
}

impl Default for OcrParameters {
    fn default() -> Self {
        Self {
            det_db_thresh: 0.3,
            det_db_box_thresh: 0.5,
            max_candidates: 2000,
            unclip_ratio: 1.6,
            use_dilation: true,
            drop_score: 0.5,
        }
    }
}

impl OcrParameters {
    pub(crate) fn apply_env<F>(&mut self, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(lookup, "DET_DB_THRESH")? {
            self.det_db_thresh = v;
        }
        if let Some(v) = parse_var(lookup, "DET_DB_BOX_THRESH")? {
            self.det_db_box_thresh = v;
        }
        if let Some(v) = parse_var(lookup, "MAX_CANDIDATES")? {
            self.max_candidates = v;
        }
        if let Some(v) = parse_var(lookup, "UNCLIP_RATIO")? {
            self.unclip_ratio = v;
        }
        if let Some(v) = bool_var(lookup, "USE_DILATION")? {
            self.use_dilation = v;
        }
        if let Some(v) = parse_var(lookup, "DROP_SCORE")? {
            self.drop_score = v;
        }
        Ok(())
    }
}
