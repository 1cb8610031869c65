//! Configuration file handling for portalkit
//!
//! This module contains:
//! - `portal.yaml` - Site configuration (asset root, resources, manifest)
//! - Locating the configuration from CLI options and the workspace

pub mod site;

use std::path::{Path, PathBuf};

use crate::error::{Result, fs::io_error};

pub use site::SiteConfig;

/// Default configuration file name inside a workspace
pub const CONFIG_FILE: &str = "portal.yaml";

/// A loaded configuration together with the directory it was read from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SiteConfig,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory that relative paths in the configuration are resolved against
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.config.manifest_path(self.dir())
    }
}

/// Pick the configuration file from `--config`, `--workspace` or the current directory
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn locate(workspace: Option<&Path>, config: Option<&Path>) -> Result<PathBuf> {
    if let Some(config) = config {
        return Ok(config.to_path_buf());
    }
    let workspace = match workspace {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?,
    };
    Ok(workspace.join(CONFIG_FILE))
}

/// Locate and load the site configuration
///
/// # Errors
///
/// Returns an error if the configuration cannot be found, read or validated.
pub fn load(workspace: Option<&Path>, config: Option<&Path>) -> Result<LoadedConfig> {
    let path = locate(workspace, config)?;
    let config = SiteConfig::load(&path)?;
    Ok(LoadedConfig { config, path })
}
