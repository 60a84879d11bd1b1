// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Validation tests: port range and required files, plus the check command
//! that reports them.

use ocr_api_config::cli::{execute, Commands, Outcome};
use ocr_api_config::console::{Console, OutputEncoding};
use ocr_api_config::{OcrApiConfig, ValidationError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config whose project root holds every required file
fn complete_install() -> (TempDir, OcrApiConfig) {
    let dir = TempDir::new().unwrap();
    let config = OcrApiConfig {
        project_root: dir.path().to_path_buf(),
        ..OcrApiConfig::default()
    };

    for file in config.models.required_files() {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"stub").unwrap();
    }

    (dir, config)
}

fn run_check(config: &OcrApiConfig, encoding: OutputEncoding) -> (Outcome, String) {
    let mut console = Console::new(Vec::new(), encoding);
    let outcome = execute(Some(&Commands::Check), config, &mut console);
    (outcome, String::from_utf8(console.into_inner()).unwrap())
}

#[test]
fn test_valid_configuration_has_no_errors() {
    let (_dir, config) = complete_install();
    assert!(config.validate().is_empty());
    assert!(config.validation_messages().is_empty());
}

#[test]
fn test_low_port_gives_one_message() {
    let (_dir, mut config) = complete_install();
    config.server.port = 80;

    let errors = config.validate();
    assert_eq!(errors, vec![ValidationError::PortOutOfRange { port: 80 }]);
    assert_eq!(
        config.validation_messages(),
        vec!["Port 80 is not in the valid range (1024-65535)".to_string()]
    );
}

#[test]
fn test_port_bounds_are_inclusive() {
    let (_dir, mut config) = complete_install();

    config.server.port = 1024;
    assert!(config.validate().is_empty());
    config.server.port = 65535;
    assert!(config.validate().is_empty());
    config.server.port = 65536;
    assert_eq!(config.validate().len(), 1);
}

#[test]
fn test_missing_font_gives_one_message() {
    let (dir, config) = complete_install();
    fs::remove_file(dir.path().join(&config.models.font_file)).unwrap();

    let messages = config.validation_messages();
    assert_eq!(
        messages,
        vec!["Missing required files: assets/fonts/simfang.ttf".to_string()]
    );
}

#[test]
fn test_missing_files_are_comma_joined_in_declared_order() {
    let (dir, config) = complete_install();
    fs::remove_file(dir.path().join(&config.models.font_file)).unwrap();
    fs::remove_file(dir.path().join(&config.models.detection_model)).unwrap();

    let errors = config.validate();
    assert_eq!(
        errors,
        vec![ValidationError::MissingFiles {
            files: vec![
                PathBuf::from("models/det.onnx"),
                PathBuf::from("assets/fonts/simfang.ttf"),
            ],
        }]
    );
    assert_eq!(
        errors[0].to_string(),
        "Missing required files: models/det.onnx, assets/fonts/simfang.ttf"
    );
}

#[test]
fn test_port_check_comes_before_file_check() {
    let dir = TempDir::new().unwrap();
    let mut config = OcrApiConfig {
        project_root: dir.path().to_path_buf(),
        ..OcrApiConfig::default()
    };
    config.server.port = 70000;

    let errors = config.validate();
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ValidationError::PortOutOfRange { port: 70000 }));
    assert!(matches!(errors[1], ValidationError::MissingFiles { ref files } if files.len() == 4));
}

#[test]
fn test_check_prints_snapshot_when_valid() {
    let (_dir, config) = complete_install();
    let (outcome, out) = run_check(&config, OutputEncoding::Utf8);

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(outcome.exit_code(), 0);

    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("✅ Configuration validation passed"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("📋 Configuration:"));

    let json_text: String = lines.collect::<Vec<_>>().join("\n");
    let json: serde_json::Value = serde_json::from_str(&json_text).unwrap();
    let expected: serde_json::Value =
        serde_json::from_str(&config.snapshot().to_pretty_json()).unwrap();
    assert_eq!(json, expected);
    assert_eq!(json["server"]["port"], 8080);
}

#[test]
fn test_check_failure_exits_non_zero() {
    let (_dir, mut config) = complete_install();
    config.server.port = 443;

    let (outcome, out) = run_check(&config, OutputEncoding::AsciiReplace);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(
        out,
        "? Configuration validation failed:\n  - Port 443 is not in the valid range (1024-65535)\n"
    );
}
