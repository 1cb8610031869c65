use clap::Parser;

use super::EnvArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the site in the current directory:\n    portalkit check\n\n\
                  Check against a deployment env file:\n    portalkit check --env-file .env.production --no-process-env")]
pub struct CheckArgs {
    #[command(flatten)]
    pub env: EnvArgs,
}
