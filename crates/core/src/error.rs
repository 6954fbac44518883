//! Error types for grid construction.

use std::fmt;

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A non-positive row or column count was requested.
    InvalidDimension { rows: usize, columns: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { rows, columns } => {
                write!(f, "grid dimensions must be positive: {}x{}", rows, columns)
            }
        }
    }
}

impl std::error::Error for GridError {}
