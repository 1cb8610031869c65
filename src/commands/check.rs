//! Check command implementation
//!
//! Loads portal.yaml, resolves every resource and validates the configured
//! manifest in one pass. Intended for CI: the command fails when the
//! configuration cannot be loaded or the manifest is invalid.

use crate::cli::CheckArgs;
use crate::commands::helpers::{GlobalOptions, build_env};
use crate::config::LoadedConfig;
use crate::env::EnvSnapshot;
use crate::error::Result;
use crate::manifest::{Manifest, ValidationResult};
use crate::resolver::{ResolvedUrl, Resolver};
use crate::ui::display;

/// Everything `check` found, before printing
#[derive(Debug)]
pub struct CheckReport {
    pub resolved: Vec<ResolvedUrl>,
    pub manifest: Option<(Manifest, ValidationResult)>,
}

/// Run check command
pub fn run(options: &GlobalOptions, args: CheckArgs) -> Result<()> {
    let loaded = options.load_config()?;
    let env = build_env(&args.env)?;

    let report = check(&loaded, &env)?;
    print_report(&loaded, &report);

    match report.manifest {
        Some((_, result)) => result.into_result(),
        None => Ok(()),
    }
}

/// Resolve all resources and validate the manifest, if one is configured
///
/// # Errors
///
/// Returns an error if the configured manifest cannot be loaded. Structural
/// problems are part of the report, not errors.
pub fn check(loaded: &LoadedConfig, env: &EnvSnapshot) -> Result<CheckReport> {
    let resolver = Resolver::new(loaded.config.asset_root());
    let resolved = resolver.resolve_all(&loaded.config.resources, env);

    let manifest = match loaded.manifest_path() {
        Some(path) => {
            let manifest = Manifest::load(&path)?;
            let result = manifest.validate();
            Some((manifest, result))
        }
        None => None,
    };

    Ok(CheckReport { resolved, manifest })
}

fn print_report(loaded: &LoadedConfig, report: &CheckReport) {
    println!(
        "{} {}",
        display::section("Configuration:"),
        loaded.path.display()
    );
    println!(
        "{} {}",
        display::section("Asset root:"),
        loaded.config.asset_root()
    );
    println!();

    println!(
        "{}",
        display::section(&format!("Resources ({}):", report.resolved.len()))
    );
    if report.resolved.is_empty() {
        println!("  none");
    } else {
        display::display_resolved(&report.resolved);
    }
    println!();

    match &report.manifest {
        None => println!("{} not configured", display::section("Manifest:")),
        Some((manifest, result)) => {
            match result.violation() {
                None => println!("{}", display::format_manifest_valid(manifest.len())),
                Some(violation) => display::display_violations(std::slice::from_ref(violation)),
            }
            if let Some(latest) = manifest.sorted_by_published().first() {
                println!(
                    "  {} {}",
                    display::section("Latest:"),
                    display::format_entry(latest)
                );
            }
        }
    }
}
