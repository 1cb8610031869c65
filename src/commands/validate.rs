//! Validate command implementation
//!
//! Validates a content manifest and reports the first violation, or every
//! violation with `--all`. An invalid manifest makes the command fail so it
//! can gate a build.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::ValidateArgs;
use crate::commands::helpers::GlobalOptions;
use crate::error::{Result, config::invalid};
use crate::manifest::{Manifest, Violation, collect_violations};
use crate::ui::display;

#[derive(Debug, Serialize)]
struct Report<'a> {
    path: String,
    valid: bool,
    entries: usize,
    violations: &'a [Violation],
}

/// Run validate command
pub fn run(options: &GlobalOptions, args: ValidateArgs) -> Result<()> {
    let path = manifest_path(options, args.path)?;
    let manifest = Manifest::load(&path)?;

    let violations = check_manifest(&manifest, args.all);

    if args.json {
        let report = Report {
            path: path.display().to_string(),
            valid: violations.is_empty(),
            entries: manifest.len(),
            violations: &violations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if violations.is_empty() {
        println!("{}", display::format_manifest_valid(manifest.len()));
    } else {
        display::display_violations(&violations);
    }

    match violations.into_iter().next() {
        Some(first) => Err(first.into()),
        None => Ok(()),
    }
}

/// First violation only, or all of them when `all` is set
pub fn check_manifest(manifest: &Manifest, all: bool) -> Vec<Violation> {
    if all {
        collect_violations(&manifest.entries)
    } else {
        manifest.validate().violation().cloned().into_iter().collect()
    }
}

/// Explicit path, else the manifest named in portal.yaml
fn manifest_path(options: &GlobalOptions, explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let loaded = options.load_config()?;
    loaded.manifest_path().ok_or_else(|| {
        invalid(format!(
            "no manifest configured in {}; pass a manifest path",
            loaded.path.display()
        ))
    })
}
