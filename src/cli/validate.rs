use clap::Parser;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the manifest named in portal.yaml:\n    portalkit validate\n\n\
                  Validate a specific file:\n    portalkit validate content/changelog.json\n\n\
                  Report every problem instead of the first:\n    portalkit validate --all")]
pub struct ValidateArgs {
    /// Manifest file (defaults to the manifest configured in portal.yaml)
    pub path: Option<PathBuf>,

    /// Report every violation instead of stopping at the first one
    #[arg(long)]
    pub all: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
