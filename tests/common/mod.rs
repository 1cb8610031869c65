//! Common test utilities for portalkit integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// portal.yaml used by most tests
#[allow(dead_code)]
pub const PORTAL_YAML: &str = r"
base: /
manifest: content/changelog.yaml
resources:
  - name: elam
    env: VITE_ELAM_URL
    fallback: games/elam/index.html
  - name: snake
    env: VITE_SNAKE_URL
    fallback: games/snake/
";

/// A valid changelog manifest
#[allow(dead_code)]
pub const CHANGELOG_YAML: &str = r"
- id: launch
  category: announcement
  publishedAt: 2024-03-01T09:00:00Z
- id: elam-1.1
  category: patch
  publishedAt: 2024-03-15T18:30:00+01:00
- id: dark-mode
  category: experiment
  publishedAt: 2024-04-02
";

/// A temporary site directory for integration tests
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create an empty site directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a site with the default portal.yaml and a valid changelog
    #[allow(dead_code)]
    pub fn with_defaults() -> Self {
        let site = Self::new();
        site.write_file("portal.yaml", PORTAL_YAML);
        site.write_file("content/changelog.yaml", CHANGELOG_YAML);
        site
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// portalkit command running inside this site, isolated from the caller's environment
    pub fn cmd(&self) -> Command {
        portalkit_cmd_for_workspace(&self.path)
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn portalkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("portalkit").expect("portalkit binary should be built");
    cmd.env_remove("PORTALKIT_WORKSPACE")
        .env_remove("PORTALKIT_LOG")
        .env_remove("VITE_ELAM_URL")
        .env_remove("VITE_SNAKE_URL");
    cmd
}

/// portalkit command with the working directory set to `path`
pub fn portalkit_cmd_for_workspace(path: &Path) -> Command {
    let mut cmd = portalkit_cmd();
    cmd.current_dir(path);
    cmd
}
