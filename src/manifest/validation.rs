//! Structural validation of content manifests
//!
//! Checks run in a fixed order and [`validate`] stops at the first failing
//! check:
//! 1. the manifest is non-empty
//! 2. every category belongs to [`Category`]
//! 3. every `publishedAt` parses as a timestamp
//! 4. ids are pairwise distinct
//!
//! Each check covers the whole manifest before the next one starts, so a
//! mistyped category anywhere is reported ahead of a duplicate id.
//!
//! [`Category`]: super::Category

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use super::ContentEntry;
use crate::error::{PortalError, Result, manifest::invalid};

/// Which structural check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    EmptyManifest,
    UnknownCategory,
    UnparseableTimestamp,
    DuplicateId,
}

impl ViolationKind {
    pub fn reason(self) -> &'static str {
        match self {
            ViolationKind::EmptyManifest => "empty manifest",
            ViolationKind::UnknownCategory => "unknown category",
            ViolationKind::UnparseableTimestamp => "unparseable timestamp",
            ViolationKind::DuplicateId => "duplicate id",
        }
    }
}

/// A failed check, with the id of the entry that failed it (if any)
///
/// Serializes as `{ kind, reason, entry_id }` so JSON reports carry the same
/// wording as the text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub entry_id: Option<String>,
}

impl Violation {
    fn new(kind: ViolationKind, entry_id: Option<&str>) -> Self {
        Self {
            kind,
            entry_id: entry_id.map(str::to_string),
        }
    }

    pub fn reason(&self) -> &'static str {
        self.kind.reason()
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("reason", self.reason())?;
        state.serialize_field("entry_id", &self.entry_id)?;
        state.end()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entry_id {
            Some(id) => write!(f, "{} (entry '{id}')", self.reason()),
            None => f.write_str(self.reason()),
        }
    }
}

impl From<Violation> for PortalError {
    fn from(violation: Violation) -> Self {
        invalid(violation.reason(), violation.entry_id)
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    #[allow(dead_code)]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(violation) => Some(violation),
        }
    }

    /// Turn an `Invalid` outcome into `PortalError::ManifestInvalid`
    ///
    /// # Errors
    ///
    /// Returns the violation as an error when the manifest is invalid.
    pub fn into_result(self) -> Result<()> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violation) => Err(violation.into()),
        }
    }
}

/// Validate a manifest, reporting the first violation
pub fn validate(entries: &[ContentEntry]) -> ValidationResult {
    match first_violation(entries) {
        Some(violation) => ValidationResult::Invalid(violation),
        None => ValidationResult::Valid,
    }
}

fn first_violation(entries: &[ContentEntry]) -> Option<Violation> {
    if entries.is_empty() {
        return Some(Violation::new(ViolationKind::EmptyManifest, None));
    }
    if let Some(entry) = entries.iter().find(|e| e.parsed_category().is_none()) {
        return Some(Violation::new(ViolationKind::UnknownCategory, Some(&entry.id)));
    }
    if let Some(entry) = entries.iter().find(|e| e.parsed_timestamp().is_none()) {
        return Some(Violation::new(
            ViolationKind::UnparseableTimestamp,
            Some(&entry.id),
        ));
    }
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .find(|e| !seen.insert(e.id.as_str()))
        .map(|entry| Violation::new(ViolationKind::DuplicateId, Some(&entry.id)))
}

/// Report every violation instead of stopping at the first one
///
/// Violations are grouped by check, in the same order [`validate`] runs
/// them, and by entry order within a check. A repeated id is reported once
/// for each occurrence after the first.
pub fn collect_violations(entries: &[ContentEntry]) -> Vec<Violation> {
    if entries.is_empty() {
        return vec![Violation::new(ViolationKind::EmptyManifest, None)];
    }

    let unknown_categories = entries
        .iter()
        .filter(|e| e.parsed_category().is_none())
        .map(|e| Violation::new(ViolationKind::UnknownCategory, Some(&e.id)));

    let bad_timestamps = entries
        .iter()
        .filter(|e| e.parsed_timestamp().is_none())
        .map(|e| Violation::new(ViolationKind::UnparseableTimestamp, Some(&e.id)));

    let mut seen = HashSet::with_capacity(entries.len());
    let duplicates = entries
        .iter()
        .filter(move |e| !seen.insert(e.id.as_str()))
        .map(|e| Violation::new(ViolationKind::DuplicateId, Some(&e.id)));

    unknown_categories
        .chain(bad_timestamps)
        .chain(duplicates)
        .collect()
}
