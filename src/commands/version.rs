//! Version command implementation
//!
//! Prints the version together with the file names, formats and categories
//! this build understands, so a deploy log shows what the site was checked
//! against.

use crate::config::CONFIG_FILE;
use crate::error::Result;
use crate::logging::LOG_ENV;
use crate::manifest::Category;

/// Run version command
pub fn run() -> Result<()> {
    for line in describe() {
        println!("{line}");
    }
    Ok(())
}

fn describe() -> Vec<String> {
    let categories = Category::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("portalkit {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        format!("  Configuration file: {CONFIG_FILE}"),
        "  Manifest formats: YAML, JSON (.json)".to_string(),
        format!("  Categories: {categories}"),
        format!("  Log filter variable: {LOG_ENV}"),
    ]
}
