//! Error type for storage backends.

use std::fmt;

use crate::types::ScalarType;

/// Errors raised by storage backends: container assembly faults and
/// bulk-copy faults.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error from the underlying resource.
    Io(std::io::Error),
    /// A variable references a dimension name the container does not define.
    UndefinedDimension { variable: String, dimension: String },
    /// A variable's data length does not match the product of its extents.
    DataLength {
        variable: String,
        declared: u64,
        stored: usize,
    },
    /// A variable was declared without a data payload.
    MissingData(String),
    /// A bulk copy was requested for a variable index the backend does not hold.
    VariableIndex(usize),
    /// A bulk `f64` copy was requested for a variable stored with another type.
    NotFloat64 { variable: String, stored: ScalarType },
    /// The destination buffer does not match the variable's element count.
    Destination {
        variable: String,
        need: usize,
        have: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::UndefinedDimension { variable, dimension } => {
                write!(f, "variable {variable}: undefined dimension {dimension}")
            }
            StoreError::DataLength {
                variable,
                declared,
                stored,
            } => write!(
                f,
                "variable {variable}: shape declares {declared} elements, data holds {stored}"
            ),
            StoreError::MissingData(name) => write!(f, "variable {name}: no data payload"),
            StoreError::VariableIndex(index) => write!(f, "no variable at index {index}"),
            StoreError::NotFloat64 { variable, stored } => {
                write!(f, "variable {variable}: stored as {stored}, not f64")
            }
            StoreError::Destination {
                variable,
                need,
                have,
            } => write!(
                f,
                "variable {variable}: destination holds {have} elements, need {need}"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}
