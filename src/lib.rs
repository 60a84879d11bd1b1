// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod version;

pub use config::{
    ConfigError, ConfigSnapshot, EndpointMap, ModelPaths, OcrApiConfig, OcrParameters,
    ServerConfig, TestImageSet, ValidationError,
};
pub use console::{Console, OutputEncoding};
