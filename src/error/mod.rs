//! Error types and handling for portalkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Structural problems in a content manifest are not errors here: the
//! validator reports them as data (see [`crate::manifest::ValidationResult`]).
//! [`PortalError::ManifestInvalid`] only exists so a caller can turn such a
//! report into a failing exit status.
//!
//! Constructor helpers are grouped by domain:
//! - [`config`]: Site configuration errors
//! - [`manifest`]: Manifest loading errors
//! - [`resource`]: Resource lookup and environment errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod manifest;
pub mod resource;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for portalkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum PortalError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(portalkit::config::not_found),
        help("Create a portal.yaml in the workspace or pass --config <file>")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(portalkit::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(portalkit::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(portalkit::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Resource errors
    #[error("Resource '{name}' not found")]
    #[diagnostic(
        code(portalkit::resource::not_found),
        help("Check the resources listed in portal.yaml")
    )]
    ResourceNotFound { name: String },

    #[error("Invalid env file {path} at line {line}: {reason}")]
    #[diagnostic(
        code(portalkit::resource::env_file_invalid),
        help("Env files contain KEY=VALUE lines; blank lines and # comments are ignored")
    )]
    EnvFileInvalid {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid variable assignment: '{input}'")]
    #[diagnostic(
        code(portalkit::resource::invalid_assignment),
        help("Use the form KEY=VALUE")
    )]
    InvalidAssignment { input: String },

    // Manifest errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(code(portalkit::manifest::not_found))]
    ManifestNotFound { path: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(portalkit::manifest::parse_failed),
        help("A manifest is a list of entries with id, category and publishedAt")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Manifest invalid: {reason}{}", entry_suffix(.entry))]
    #[diagnostic(code(portalkit::manifest::invalid))]
    ManifestInvalid {
        reason: String,
        entry: Option<String>,
    },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(portalkit::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(portalkit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(portalkit::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(portalkit::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PortalError {
    fn from(err: serde_yaml::Error) -> Self {
        PortalError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

fn entry_suffix(entry: &Option<String>) -> String {
    entry
        .as_ref()
        .map(|id| format!(" (entry '{id}')"))
        .unwrap_or_default()
}

/// Result type alias for portalkit operations
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests;
