//! Site configuration (portal.yaml)

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{
    Result,
    config::{invalid, not_found, parse_failed, read_failed},
    resource,
};
use crate::resolver::{AssetRoot, ResourceDescriptor};

fn default_base() -> String {
    "/".to_string()
}

/// Site configuration from portal.yaml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Static-asset root that fallback paths are resolved against
    #[serde(default = "default_base")]
    pub base: String,

    /// Content manifest, relative to the configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// External resources, in display order
    #[serde(default)]
    pub resources: Vec<ResourceDescriptor>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            manifest: None,
            resources: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse site configuration from YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the configuration is invalid.
    #[allow(dead_code)]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the configuration file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, malformed or invalid.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(not_found(path.display().to_string()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;

        tracing::debug!(
            "Loaded {} with {} resources",
            path.display(),
            config.resources.len()
        );
        Ok(config)
    }

    /// Validate site configuration
    ///
    /// # Errors
    ///
    /// Returns `PortalError::ConfigInvalid` for an empty base, a malformed
    /// resource descriptor or a repeated resource name.
    pub fn validate(&self) -> Result<()> {
        if self.base.trim().is_empty() {
            return Err(invalid("base cannot be empty"));
        }

        let mut names = HashSet::new();
        for descriptor in &self.resources {
            descriptor.validate()?;
            if !names.insert(descriptor.name.as_str()) {
                return Err(invalid(format!(
                    "duplicate resource name '{}'",
                    descriptor.name
                )));
            }
        }

        Ok(())
    }

    pub fn asset_root(&self) -> AssetRoot {
        AssetRoot::new(&self.base)
    }

    /// Find a resource by name
    ///
    /// # Errors
    ///
    /// Returns `PortalError::ResourceNotFound` if no resource has that name.
    pub fn find(&self, name: &str) -> Result<&ResourceDescriptor> {
        self.resources
            .iter()
            .find(|descriptor| descriptor.name == name)
            .ok_or_else(|| resource::not_found(name))
    }

    /// Manifest path resolved against the directory holding the configuration
    pub fn manifest_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.manifest.as_ref().map(|path| config_dir.join(path))
    }
}
