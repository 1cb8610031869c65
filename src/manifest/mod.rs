//! Content manifests
//!
//! A manifest is an ordered list of [`ContentEntry`] items, stored as YAML or
//! JSON. Either a top-level list or a mapping with an `entries` key is
//! accepted:
//!
//! ```yaml
//! entries:
//!   - id: elam-1.1
//!     category: patch
//!     publishedAt: 2024-03-15T18:30:00Z
//! ```
//!
//! Loading only checks the document shape. Structural rules (categories,
//! timestamps, unique ids) are reported by [`validate`].

pub mod entry;
pub mod validation;

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::{
    Result,
    fs::read_failed,
    manifest::{not_found, parse_failed},
};

pub use entry::{Category, ContentEntry};
pub use validation::{ValidationResult, Violation, ViolationKind, collect_violations, validate};

/// Why manifest content could not be read as a list of entries
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expected a list of entries or an 'entries' key")]
    MissingEntries,
}

/// On-disk format of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// `.json` files are JSON, everything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Yaml,
        }
    }
}

/// An ordered, read-only sequence of content entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ContentEntry>,
}

impl Manifest {
    #[allow(dead_code)]
    pub fn new(entries: Vec<ContentEntry>) -> Self {
        Self { entries }
    }

    /// Load a manifest file, picking the format from its extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not a list of entries.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

        let manifest = Self::parse(&content, ManifestFormat::from_path(path))
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(
            "Loaded manifest with {} entries from {}",
            manifest.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Parse manifest content
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the content is malformed or not a list of entries.
    pub fn parse(content: &str, format: ManifestFormat) -> std::result::Result<Self, ParseError> {
        let entries = match format {
            ManifestFormat::Yaml => parse_yaml(content),
            ManifestFormat::Json => parse_json(content),
        }?;
        Ok(Self { entries })
    }

    /// Validate this manifest, reporting the first violation
    pub fn validate(&self) -> ValidationResult {
        validate(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first, for display
    ///
    /// Entries whose timestamp does not parse keep their relative order and
    /// go last.
    pub fn sorted_by_published(&self) -> Vec<&ContentEntry> {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|entry| (entry.parsed_timestamp(), entry))
            .collect();
        // Option orders None first, so reversing puts unparseable entries last
        sorted.sort_by(|(a, _), (b, _)| b.cmp(a));
        sorted.into_iter().map(|(_, entry)| entry).collect()
    }
}

fn parse_yaml(content: &str) -> std::result::Result<Vec<ContentEntry>, ParseError> {
    let document: serde_yaml::Value = serde_yaml::from_str(content)?;
    let list = match document {
        serde_yaml::Value::Mapping(mut map) => {
            map.remove("entries").ok_or(ParseError::MissingEntries)?
        }
        other => other,
    };
    if list.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_value(list)?)
}

fn parse_json(content: &str) -> std::result::Result<Vec<ContentEntry>, ParseError> {
    let document: serde_json::Value = serde_json::from_str(content)?;
    let list = match document {
        serde_json::Value::Object(mut map) => {
            map.remove("entries").ok_or(ParseError::MissingEntries)?
        }
        other => other,
    };
    if list.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(list)?)
}
