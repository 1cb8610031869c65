//! Display functions for resolved URLs and manifest reports
//!
//! Formatting is kept separate from printing so the text can be tested.
//! Styles come from `console`, which drops colors when output is not a terminal.

use console::Style;

use crate::manifest::{ContentEntry, Violation};
use crate::resolver::{ResolvedUrl, UrlSource};

/// One line per resolved resource, with names padded to a common width
pub fn format_resolved(resolved: &[ResolvedUrl]) -> Vec<String> {
    let width = resolved.iter().map(|r| r.name.len()).max().unwrap_or(0);
    resolved
        .iter()
        .map(|r| {
            let source = match &r.source {
                UrlSource::Override { variable } => Style::new()
                    .cyan()
                    .apply_to(format!("(override: {variable})"))
                    .to_string(),
                UrlSource::Fallback => Style::new().dim().apply_to("(fallback)").to_string(),
            };
            format!(
                "  {}  {}  {}",
                Style::new()
                    .bold()
                    .yellow()
                    .apply_to(format!("{:width$}", r.name)),
                r.url,
                source
            )
        })
        .collect()
}

pub fn display_resolved(resolved: &[ResolvedUrl]) {
    for line in format_resolved(resolved) {
        println!("{line}");
    }
}

pub fn format_manifest_valid(entry_count: usize) -> String {
    let noun = if entry_count == 1 { "entry" } else { "entries" };
    format!(
        "{} Manifest valid ({entry_count} {noun})",
        Style::new().green().bold().apply_to("✓")
    )
}

/// Header plus one bullet per violation
pub fn format_violations(violations: &[Violation]) -> Vec<String> {
    let mark = Style::new().red().bold().apply_to("✗");
    match violations {
        [] => Vec::new(),
        [single] => vec![format!("{mark} Manifest invalid: {single}")],
        many => {
            let mut lines = vec![format!("{mark} Manifest invalid ({} problems):", many.len())];
            lines.extend(many.iter().map(|v| format!("  - {v}")));
            lines
        }
    }
}

pub fn display_violations(violations: &[Violation]) {
    for line in format_violations(violations) {
        println!("{line}");
    }
}

/// Short summary of an entry: `id (category, publishedAt)`
pub fn format_entry(entry: &ContentEntry) -> String {
    format!(
        "{} ({}, {})",
        Style::new().bold().apply_to(&entry.id),
        entry.category,
        entry.published_at
    )
}

pub fn section(title: &str) -> String {
    Style::new().bold().apply_to(title).to_string()
}
