use clap::Parser;

use super::EnvArgs;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve every resource in portal.yaml:\n    portalkit resolve\n\n\
                  Resolve a single resource:\n    portalkit resolve elam\n\n\
                  Resolve with a deployment env file:\n    portalkit resolve --env-file .env.production\n\n\
                  Try an override without exporting it:\n    portalkit resolve elam --set VITE_ELAM_URL=https://custom.example.com/elam\n\n\
                  Machine-readable output:\n    portalkit resolve --json")]
pub struct ResolveArgs {
    /// Resource names to resolve (defaults to all, in configuration order)
    pub names: Vec<String>,

    #[command(flatten)]
    pub env: EnvArgs,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}
