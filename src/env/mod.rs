//! Environment snapshots
//!
//! The resolver never reads the process environment itself. Callers capture
//! an [`EnvSnapshot`] once (from the process, from env files, from CLI
//! assignments, or a layering of these) and pass it in explicitly.

pub mod file;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, resource::invalid_assignment};

/// Immutable mapping from variable name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Build a snapshot from name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Load a dotenv-style file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains a malformed line.
    pub fn from_env_file(path: &Path) -> Result<Self> {
        file::load(path).map(Self::from_pairs)
    }

    /// Returns a new snapshot where `other` wins on conflicting names
    #[must_use]
    pub fn layered(self, other: EnvSnapshot) -> Self {
        let mut vars = self.vars;
        vars.extend(other.vars);
        Self { vars }
    }

    /// Raw value of a variable, if set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of a variable, if set and not blank
    ///
    /// Blankness is judged on the trimmed value but the raw value is returned.
    pub fn get_non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Parse a `KEY=VALUE` assignment as given on the command line
///
/// The value is kept verbatim, including an empty value (`KEY=`).
///
/// # Errors
///
/// Returns `PortalError::InvalidAssignment` if there is no `=` or the key is empty.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| invalid_assignment(input))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid_assignment(input));
    }
    Ok((key.to_string(), value.to_string()))
}
