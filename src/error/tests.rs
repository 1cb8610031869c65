//! Error type tests
//!
//! Tests for PortalError enum, its constructors and conversions.

#![allow(clippy::expect_used)]

use crate::error::PortalError;
use crate::error::config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
use crate::error::fs::{io_error, not_found as file_not_found, read_failed as file_read_failed};
use crate::error::manifest::{
    invalid as manifest_invalid, not_found as manifest_not_found,
    parse_failed as manifest_parse_failed,
};
use crate::error::resource::{env_file_invalid, invalid_assignment, not_found as resource_not_found};
use miette::Diagnostic;

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
    let err = PortalError::ResourceNotFound {
        name: "elam".to_string(),
    };
    assert_eq!(err.to_string(), "Resource 'elam' not found");
}

#[test]
fn test_error_code() {
    let err = PortalError::ResourceNotFound {
        name: "elam".to_string(),
    };
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("portalkit::resource::not_found".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let portal_err: PortalError = io_err.into();
    assert!(matches!(portal_err, PortalError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let yaml_str = "invalid: yaml: content: [unclosed";
    let parse_result: std::result::Result<serde_yaml::Value, _> = serde_yaml::from_str(yaml_str);
    let yaml_err = parse_result.expect_err("YAML parsing should have failed");
    let portal_err: PortalError = yaml_err.into();
    assert!(matches!(portal_err, PortalError::ConfigParseFailed { .. }));
}

#[test]
fn test_json_error_conversion() {
    let json_str = "invalid json content";
    let parse_result: std::result::Result<serde_json::Value, _> = serde_json::from_str(json_str);
    let json_err = parse_result.expect_err("JSON parsing should have failed");
    let portal_err: PortalError = json_err.into();
    assert!(matches!(portal_err, PortalError::ConfigParseFailed { .. }));
}

// Config error tests
test_error_contains!(
    test_config_not_found,
    config_not_found("/site/portal.yaml"),
    "Configuration file not found",
    "/site/portal.yaml"
);

test_error_contains!(
    test_config_parse_failed,
    config_parse_failed("portal.yaml", "unexpected end of input"),
    "Failed to parse configuration file",
    "unexpected end of input"
);

test_error_contains!(
    test_config_invalid,
    config_invalid("duplicate resource name 'elam'"),
    "Invalid configuration",
    "duplicate resource name"
);

test_error_contains!(
    test_config_read_failed,
    config_read_failed("portal.yaml", "permission denied"),
    "Failed to read configuration file"
);

// Manifest error tests
test_error_contains!(
    test_manifest_not_found,
    manifest_not_found("content/changelog.yaml"),
    "Manifest not found",
    "changelog.yaml"
);

test_error_contains!(
    test_manifest_parse_failed,
    manifest_parse_failed("changelog.json", "expected value"),
    "Failed to parse manifest"
);

#[test]
fn test_manifest_invalid_with_entry() {
    let err = manifest_invalid("duplicate id", Some("patch-1".to_string()));
    assert_eq!(
        err.to_string(),
        "Manifest invalid: duplicate id (entry 'patch-1')"
    );
}

#[test]
fn test_manifest_invalid_without_entry() {
    let err = manifest_invalid("empty manifest", None);
    assert_eq!(err.to_string(), "Manifest invalid: empty manifest");
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("portalkit::manifest::invalid".to_string())
    );
}

// Resource error tests
test_error_contains!(
    test_resource_not_found,
    resource_not_found("snake"),
    "Resource 'snake' not found"
);

test_error_contains!(
    test_env_file_invalid,
    env_file_invalid(".env.production", 3, "missing '='"),
    "Invalid env file .env.production at line 3",
    "missing '='"
);

test_error_contains!(
    test_invalid_assignment,
    invalid_assignment("VITE_ELAM_URL"),
    "Invalid variable assignment",
    "VITE_ELAM_URL"
);

// File system error tests
test_error_contains!(test_file_not_found, file_not_found("/missing"), "File not found");

test_error_contains!(
    test_file_read_failed,
    file_read_failed("/locked", "permission denied"),
    "Failed to read file"
);

test_error_contains!(test_io_error, io_error("disk full"), "IO error: disk full");

#[test]
fn test_unsupported_shell_has_help() {
    let err = PortalError::UnsupportedShell {
        shell: "tcsh".to_string(),
    };
    assert!(err.help().is_some());
    assert_eq!(err.to_string(), "Unknown shell: tcsh");
}
