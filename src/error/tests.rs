//! Error type tests
//!
//! Tests for DircatError enum and its conversions.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use super::DircatError;
use super::config::{
    invalid as config_invalid, invalid_glob, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
use super::fs::{io_error, output_create_failed, write_failed};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = DircatError::ConfigInvalid {
        message: "output path is not set".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid configuration: output path is not set"
    );
}

#[test]
fn test_error_code() {
    let err = output_create_failed(Path::new("/missing/out.txt"), "No such file or directory");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("dircat::fs::output_create_failed".to_string())
    );
}

#[test]
fn test_output_create_failed_has_help() {
    let err = output_create_failed(Path::new("/missing/out.txt"), "denied");
    assert!(err.help().is_some());
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DircatError = io_err.into();
    assert!(matches!(err, DircatError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("directories: [unclosed");
    let err: DircatError = parse_result.unwrap_err().into();
    assert!(matches!(err, DircatError::ConfigParseFailed { .. }));
}

test_error_contains!(
    test_config_not_found,
    config_not_found("/etc/dircat.yaml"),
    "Configuration file not found",
    "/etc/dircat.yaml"
);

test_error_contains!(
    test_config_read_failed,
    config_read_failed("/etc/dircat.yaml", "permission denied"),
    "Failed to read configuration file",
    "permission denied"
);

test_error_contains!(
    test_config_parse_failed,
    config_parse_failed("/etc/dircat.yaml", "invalid type"),
    "Failed to parse configuration file"
);

test_error_contains!(
    test_config_invalid,
    config_invalid("output path is not set"),
    "Invalid configuration"
);

test_error_contains!(
    test_invalid_glob,
    invalid_glob("**/[", "unclosed class"),
    "Invalid include pattern",
    "**/["
);

test_error_contains!(
    test_output_create_failed,
    output_create_failed(Path::new("/missing/out.txt"), "No such file or directory"),
    "Failed to create output file",
    "/missing/out.txt"
);

test_error_contains!(
    test_write_failed,
    write_failed(Path::new("/tmp/out.txt"), "disk full"),
    "Failed to write file",
    "disk full"
);

test_error_contains!(test_io_error, io_error("broken pipe"), "IO error");

test_error_contains!(
    test_unsupported_shell,
    DircatError::UnsupportedShell {
        shell: "tcsh".to_string()
    },
    "Unsupported shell: tcsh"
);
