use clap::Args;
use std::path::PathBuf;

/// Options that build the environment snapshot used for resolution
///
/// Layers apply in order: process environment, env files, then `--set`.
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Read variables from a dotenv-style file (repeatable, later files win)
    #[arg(long = "env-file", value_name = "FILE")]
    pub env_files: Vec<PathBuf>,

    /// Set a variable for this run (repeatable, e.g. --set VITE_ELAM_URL=/elam/)
    #[arg(long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Ignore the process environment
    #[arg(long)]
    pub no_process_env: bool,
}
