//! Command helper utilities

use crate::cli::{Cli, EnvArgs};
use crate::config::{self, LoadedConfig};
use crate::env::{EnvSnapshot, parse_assignment};
use crate::error::Result;

/// Global options every command that reads portal.yaml needs
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub workspace: Option<std::path::PathBuf>,
    pub config: Option<std::path::PathBuf>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            workspace: cli.workspace.clone(),
            config: cli.config.clone(),
        }
    }
}

impl GlobalOptions {
    /// Locate and load portal.yaml
    pub fn load_config(&self) -> Result<LoadedConfig> {
        config::load(self.workspace.as_deref(), self.config.as_deref())
    }
}

/// Build the environment snapshot: process env, then env files, then `--set`
///
/// The process environment is captured here once; nothing downstream reads it.
pub fn build_env(args: &EnvArgs) -> Result<EnvSnapshot> {
    let mut env = if args.no_process_env {
        EnvSnapshot::new()
    } else {
        EnvSnapshot::from_process()
    };

    for path in &args.env_files {
        env = env.layered(EnvSnapshot::from_env_file(path)?);
    }

    let assignments = args
        .set
        .iter()
        .map(|input| parse_assignment(input))
        .collect::<Result<Vec<_>>>()?;
    env = env.layered(EnvSnapshot::from_pairs(assignments));

    tracing::debug!("Environment snapshot has {} variables", env.len());
    Ok(env)
}
