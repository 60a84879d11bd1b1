// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR API service configuration
//!
//! [`OcrApiConfig`] gathers every setting the service needs and is built once,
//! then passed by reference to whatever consumes it. Values are layered:
//! built-in defaults, then an optional TOML file, then environment variables.
//!
//! Components:
//! - `server` - host, port, debug flag and client timeouts
//! - `models` - detection/recognition model and asset file paths
//! - `ocr` - detection and recognition tuning values
//! - `endpoints` - endpoint name to URL path mapping
//! - `test_images` - sample images for exercising the API
//! - `validation` - port and required-file checks
//! - `snapshot` - serializable view for display

pub mod endpoints;
pub mod env;
pub mod error;
pub mod logging;
pub mod models;
pub mod ocr;
pub mod responses;
pub mod server;
pub mod snapshot;
pub mod test_images;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use endpoints::EndpointMap;
pub use error::{ConfigError, ConfigResult};
pub use logging::LoggingConfig;
pub use models::ModelPaths;
pub use ocr::OcrParameters;
pub use responses::{ErrorResponse, ResponseTemplates, SuccessResponse};
pub use server::{ServerConfig, TimeoutConfig, VALID_PORT_RANGE};
pub use snapshot::ConfigSnapshot;
pub use test_images::TestImageSet;
pub use validation::ValidationError;

/// Environment variable that moves the project root
pub const PROJECT_ROOT_ENV: &str = "OCR_PROJECT_ROOT";

/// Complete configuration of the OCR API service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrApiConfig {
    /// Install root that relative model and image paths are resolved against
    pub project_root: PathBuf,
    pub server: ServerConfig,
    pub models: ModelPaths,
    #[serde(rename = "test")]
    pub test_images: TestImageSet,
    pub ocr: OcrParameters,
    pub endpoints: EndpointMap,
    pub logging: LoggingConfig,
    pub timeouts: TimeoutConfig,
    pub responses: ResponseTemplates,
}

impl Default for OcrApiConfig {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            server: ServerConfig::default(),
            models: ModelPaths::default(),
            test_images: TestImageSet::default(),
            ocr: OcrParameters::default(),
            endpoints: EndpointMap::default(),
            logging: LoggingConfig::default(),
            timeouts: TimeoutConfig::default(),
            responses: ResponseTemplates::default(),
        }
    }
}

/// Directory holding the running executable
///
/// Falls back to the working directory, then `.`, when the executable path
/// cannot be determined.
pub fn default_project_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

impl OcrApiConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing tables and keys keep their defaults. A relative `project_root`
    /// is taken relative to the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: OcrApiConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.project_root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.project_root = base.join(&config.project_root);
        }

        debug!("Loaded OCR config from {}", path.display());
        Ok(config)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_env(&|key: &str| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults, then `path` if given, then environment overrides
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(&|key: &str| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps variable names to values
    pub fn apply_env<F>(&mut self, lookup: &F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = env::string_var(lookup, PROJECT_ROOT_ENV) {
            self.project_root = PathBuf::from(root);
        }
        self.server.apply_env(lookup)?;
        self.models.apply_env(lookup);
        self.test_images.apply_env(lookup);
        self.ocr.apply_env(lookup)?;
        self.logging.apply_env(lookup);
        self.timeouts.apply_env(lookup)?;
        Ok(())
    }

    /// Base URL of the API server
    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    /// Full path of a sample image; the file may not exist
    pub fn resolve_test_image_path(&self, filename: &str) -> PathBuf {
        self.test_images.resolve(&self.project_root, filename)
    }

    /// Full paths of all sample images, in declared order
    pub fn list_test_image_paths(&self) -> Vec<PathBuf> {
        self.test_images.resolve_all(&self.project_root)
    }

    /// URL for a named endpoint
    ///
    /// Unknown names are appended verbatim, so `"unknown-key"` yields
    /// `http://localhost:8080unknown-key`.
    pub fn build_api_url(&self, endpoint: &str) -> String {
        if self.endpoints.get(endpoint).is_none() {
            debug!("Endpoint '{}' not configured, using it as a literal path", endpoint);
        }
        format!(
            "{}{}",
            self.server.base_url(),
            self.endpoints.path_or_literal(endpoint)
        )
    }

    /// Where a declared model path lives on disk
    pub fn resolve_model_path(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }

    /// Required files that do not exist, as declared and in declared order
    ///
    /// Checks the filesystem on every call. A probe that errors (permission
    /// denied, broken mount) counts as missing.
    pub fn find_missing_required_files(&self) -> Vec<PathBuf> {
        self.models
            .required_files()
            .into_iter()
            .filter(|declared| {
                let resolved = self.resolve_model_path(declared);
                match resolved.try_exists() {
                    Ok(true) => false,
                    Ok(false) => {
                        debug!("Required file missing: {}", resolved.display());
                        true
                    }
                    Err(e) => {
                        debug!("Cannot check {}: {}", resolved.display(), e);
                        true
                    }
                }
            })
            .cloned()
            .collect()
    }

    /// Port check followed by the required-file check; empty when valid
    pub fn validate(&self) -> Vec<ValidationError> {
        validation::validate(self)
    }

    /// Validation issues rendered as messages
    pub fn validation_messages(&self) -> Vec<String> {
        self.validate().iter().map(ToString::to_string).collect()
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot::from_config(self)
    }
}
