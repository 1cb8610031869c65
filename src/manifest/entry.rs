//! Content entries and their categories

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Closed set of categories a content entry may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Patch,
    Experiment,
    Announcement,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Patch,
        Category::Experiment,
        Category::Announcement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Patch => "patch",
            Category::Experiment => "experiment",
            Category::Announcement => "announcement",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

/// One published item of the manifest (e.g., a changelog post)
///
/// Fields hold the raw source data; typed views are computed on demand so
/// that a malformed entry can still be loaded and then reported by the
/// validator. Hand-edited YAML often has `id: 2` or `category: ~`, so any
/// scalar is accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(deserialize_with = "scalar_text")]
    pub id: String,

    #[serde(deserialize_with = "scalar_text")]
    pub category: String,

    #[serde(
        rename = "publishedAt",
        alias = "published_at",
        deserialize_with = "scalar_text"
    )]
    pub published_at: String,
}

/// Numbers and booleans become their text, null becomes empty
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl ContentEntry {
    #[allow(dead_code)]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            published_at: published_at.into(),
        }
    }

    pub fn parsed_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.published_at)
    }
}

/// Parse an ISO-8601 timestamp
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00Z`), a date-time without offset
/// (`2024-05-01T12:00:00`, taken as UTC) and a bare date (`2024-05-01`,
/// taken as midnight UTC).
pub fn parse_timestamp(input: &str) -> Option<DateTime<FixedOffset>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed);
    }

    let utc = FixedOffset::east_opt(0)?;

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc().with_timezone(&utc));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().with_timezone(&utc))
}
