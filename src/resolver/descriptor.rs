//! Resource descriptors as declared in `portal.yaml`

use serde::{Deserialize, Serialize};

use crate::error::{Result, config::invalid};

/// A named external resource whose URL can be overridden from the environment
///
/// ```yaml
/// - name: elam
///   env: VITE_ELAM_URL
///   fallback: games/elam/index.html
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource name (e.g., "elam")
    pub name: String,

    /// Environment variable that may override the URL
    #[serde(rename = "env")]
    pub override_variable: String,

    /// Path relative to the static-asset root, used when no override is set
    #[serde(rename = "fallback")]
    pub fallback_path: String,
}

impl ResourceDescriptor {
    #[allow(dead_code)]
    pub fn new(
        name: impl Into<String>,
        override_variable: impl Into<String>,
        fallback_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            override_variable: override_variable.into(),
            fallback_path: fallback_path.into(),
        }
    }

    /// Check the preconditions the resolver relies on
    ///
    /// The resolver itself does not re-check these; a descriptor with an
    /// empty override variable or fallback path is a configuration mistake.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::ConfigInvalid` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("resource name cannot be empty"));
        }
        if self.override_variable.trim().is_empty() {
            return Err(invalid(format!(
                "resource '{}' has an empty override variable",
                self.name
            )));
        }
        if self.override_variable.contains(char::is_whitespace) {
            return Err(invalid(format!(
                "resource '{}' override variable '{}' contains whitespace",
                self.name, self.override_variable
            )));
        }
        if self.fallback_path.trim().is_empty() {
            return Err(invalid(format!(
                "resource '{}' has an empty fallback path",
                self.name
            )));
        }
        Ok(())
    }
}
