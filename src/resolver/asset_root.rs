//! Static-asset root of the deployed site

use std::fmt;

/// Base under which the site's own static files are served
///
/// Always ends with a single `/`. It may be a path (`/`, `/portal/`) or an
/// absolute URL (`https://cdn.example.com/portal/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot(String);

impl AssetRoot {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        Self(format!("{trimmed}/"))
    }

    #[allow(dead_code)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve a relative asset path against this root
    ///
    /// Leading `./` and `/` segments of `path` are dropped, so the result
    /// always stays under the root.
    pub fn join(&self, path: &str) -> String {
        let mut relative = path.trim();
        loop {
            if let Some(rest) = relative.strip_prefix("./") {
                relative = rest;
            } else if let Some(rest) = relative.strip_prefix('/') {
                relative = rest;
            } else {
                break;
            }
        }
        format!("{}{}", self.0, relative)
    }
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl fmt::Display for AssetRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
