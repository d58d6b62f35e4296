//! Error types for the typed access layer.

use std::fmt;

use arrayfile_store::{ScalarType, StoreError};

/// Errors from the `Result`-returning read paths.
///
/// The query surface (lookups, counts, shape checks, the boolean bulk
/// read) never produces these; it signals through `Option`, `bool`, and
/// clamped counts instead.
#[derive(Debug)]
pub enum Error {
    /// Fault reported by the storage backend.
    Store(StoreError),
    /// A named variable was not found.
    VariableNotFound(String),
    /// A variable's stored element type does not match the requested one.
    TypeMismatch {
        variable: String,
        expected: ScalarType,
        actual: ScalarType,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(e) => write!(f, "storage error: {e}"),
            Error::VariableNotFound(name) => write!(f, "variable not found: {name}"),
            Error::TypeMismatch {
                variable,
                expected,
                actual,
            } => write!(f, "variable {variable}: stored as {actual}, requested {expected}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Store(e)
    }
}
