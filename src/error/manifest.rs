//! Manifest errors

use super::PortalError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> PortalError {
    PortalError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PortalError {
    PortalError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest invalid error from a violation reason
pub fn invalid(reason: impl Into<String>, entry: Option<String>) -> PortalError {
    PortalError::ManifestInvalid {
        reason: reason.into(),
        entry,
    }
}
