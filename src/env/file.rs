//! Dotenv-style file parsing
//!
//! Supported syntax, one assignment per line:
//! - `KEY=VALUE`, optionally prefixed with `export `
//! - values wrapped in matching single or double quotes are unquoted
//! - blank lines and lines starting with `#` are ignored
//!
//! No variable expansion is performed.

use std::fs;
use std::path::Path;

use crate::error::{Result, fs::not_found, fs::read_failed, resource::env_file_invalid};

/// Read and parse an env file into ordered name/value pairs
pub fn load(path: &Path) -> Result<Vec<(String, String)>> {
    if !path.is_file() {
        return Err(not_found(path.display().to_string()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
    let pairs = parse(&content, &path.display().to_string())?;
    tracing::debug!("Loaded {} variables from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Parse env file content; `origin` is only used in error messages
pub fn parse(content: &str, origin: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map_or(line, str::trim_start);

        let Some((key, value)) = line.split_once('=') else {
            return Err(env_file_invalid(origin, index + 1, "missing '='"));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(env_file_invalid(origin, index + 1, "empty variable name"));
        }

        pairs.push((key.to_string(), unquote(value.trim()).to_string()));
    }

    Ok(pairs)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
