//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - validate: Validate command arguments
//! - check: Check command arguments
//! - completions: Completions command arguments
//! - env: Environment snapshot options shared by resolve and check

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod env;
pub mod resolve;
pub mod validate;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use env::EnvArgs;
pub use resolve::ResolveArgs;
pub use validate::ValidateArgs;

/// portalkit - game portal configuration tool
///
/// Resolve game URLs from the environment and validate the content manifest.
#[derive(Parser, Debug)]
#[command(
    name = "portalkit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve game URLs and validate the content manifest of the game portal",
    long_about = "portalkit resolves the URL each embedded game is loaded from, preferring an \
                  environment override and falling back to the bundled copy under the site's \
                  static-asset root, and validates the changelog manifest shipped with the site.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  portalkit resolve                          \x1b[90m# Resolve every resource\x1b[0m\n   \
                  portalkit resolve elam --env-file .env     \x1b[90m# Resolve one resource with an env file\x1b[0m\n   \
                  portalkit validate content/changelog.yaml  \x1b[90m# Validate a manifest\x1b[0m\n   \
                  portalkit check                            \x1b[90m# Resolve and validate everything\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory containing portal.yaml (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "PORTALKIT_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Path to the site configuration file (overrides --workspace)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve resource URLs
    Resolve(ResolveArgs),

    /// Validate a content manifest
    Validate(ValidateArgs),

    /// Resolve all resources and validate the configured manifest
    Check(CheckArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
