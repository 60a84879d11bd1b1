// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Config layering tests: defaults, TOML file, environment overrides

use ocr_api_config::{ConfigError, OcrApiConfig};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("ocr.toml");
    fs::write(&path, content).unwrap();
    path
}

fn env_map(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
port = 9090

[ocr]
drop_score = 0.7
"#,
    );

    let config = OcrApiConfig::from_file(&path).unwrap();
    let defaults = OcrApiConfig::default();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "localhost");
    assert_eq!(config.ocr.drop_score, 0.7);
    assert_eq!(config.ocr.max_candidates, 2000);
    assert_eq!(config.models, defaults.models);
    assert_eq!(config.endpoints, defaults.endpoints);
    assert_eq!(config.timeouts, defaults.timeouts);
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
project_root = "/opt/ocr"

[server]
host = "0.0.0.0"
port = 8000
debug = true

[models]
detection_model = "weights/det_v4.onnx"
font_file = "fonts/NotoSansCJK.ttc"

[test]
images_dir = "samples"
images = ["receipt.png", "发票.jpg"]

[endpoints]
ocr = "/v1/ocr"
batch = "/v1/ocr/batch"

[logging]
level = "debug"
format = "{time} {level} {message}"

[timeouts]
request_timeout_secs = 60

[responses.error]
success = false
error = "OCR failed"
"#,
    );

    let config = OcrApiConfig::from_file(&path).unwrap();

    assert_eq!(config.project_root, PathBuf::from("/opt/ocr"));
    assert!(config.server.debug);
    assert_eq!(config.build_api_url("ocr"), "http://0.0.0.0:8000/v1/ocr");
    assert_eq!(config.build_api_url("batch"), "http://0.0.0.0:8000/v1/ocr/batch");
    assert_eq!(config.build_api_url("health"), "http://0.0.0.0:8000/health");
    assert_eq!(config.models.detection_model, PathBuf::from("weights/det_v4.onnx"));
    assert_eq!(config.models.recognition_model, PathBuf::from("models/rec.onnx"));
    assert_eq!(
        config.resolve_test_image_path("发票.jpg"),
        PathBuf::from("/opt/ocr/samples/发票.jpg")
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.timeouts.request_timeout_secs, 60);
    assert_eq!(config.timeouts.health_check_timeout_secs, 5);
    assert_eq!(config.responses.error.error, "OCR failed");
    assert!(config.responses.success.success);
}

#[test]
fn test_relative_project_root_is_relative_to_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "project_root = \"install\"\n");

    let config = OcrApiConfig::from_file(&path).unwrap();
    assert_eq!(config.project_root, dir.path().join("install"));
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nport = 9090\nhost = \"filehost\"\n");

    let mut config = OcrApiConfig::from_file(&path).unwrap();
    config
        .apply_env(&env_map(&[("SERVER_PORT", "7070"), ("USE_DILATION", "false")]))
        .unwrap();

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.server.host, "filehost");
    assert!(!config.ocr.use_dilation);
}

#[test]
fn test_out_of_range_port_survives_loading() {
    let mut config = OcrApiConfig::default();
    config
        .apply_env(&env_map(&[("SERVER_PORT", "70000")]))
        .unwrap();
    assert_eq!(config.server.port, 70000);
    assert!(!config.server.port_in_range());
}

#[test]
fn test_invalid_env_value() {
    let mut config = OcrApiConfig::default();
    let err = config
        .apply_env(&env_map(&[("DET_DB_THRESH", "high")]))
        .unwrap_err();

    match err {
        ConfigError::InvalidValue { key, value, .. } => {
            assert_eq!(key, "DET_DB_THRESH");
            assert_eq!(value, "high");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nport = \"eighty\"\n");

    let err = OcrApiConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("ocr.toml"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = OcrApiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
