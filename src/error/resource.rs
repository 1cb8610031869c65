//! Resource and environment errors

use super::PortalError;

/// Creates a resource not found error
pub fn not_found(name: impl Into<String>) -> PortalError {
    PortalError::ResourceNotFound { name: name.into() }
}

/// Creates an env file error pointing at a 1-based line number
pub fn env_file_invalid(path: impl Into<String>, line: usize, reason: impl Into<String>) -> PortalError {
    PortalError::EnvFileInvalid {
        path: path.into(),
        line,
        reason: reason.into(),
    }
}

/// Creates an invalid `KEY=VALUE` assignment error
pub fn invalid_assignment(input: impl Into<String>) -> PortalError {
    PortalError::InvalidAssignment {
        input: input.into(),
    }
}
