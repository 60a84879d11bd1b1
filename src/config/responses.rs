// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Default response payload skeletons

use serde::{Deserialize, Serialize};

/// Success payload: `{"success": true, "message": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Error payload: `{"success": false, "error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// The pair of templates the service starts its responses from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    pub success: SuccessResponse,
    pub error: ErrorResponse,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            success: SuccessResponse {
                success: true,
                message: "OCR service is running normally".to_string(),
            },
            error: ErrorResponse {
                success: false,
                error: "Unknown error".to_string(),
            },
        }
    }
}

impl ResponseTemplates {
    /// Success template with a different message
    pub fn success_with(&self, message: impl Into<String>) -> SuccessResponse {
        SuccessResponse {
            message: message.into(),
            ..self.success.clone()
        }
    }

    /// Error template with a different error text
    pub fn error_with(&self, error: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: error.into(),
            ..self.error.clone()
        }
    }
}
