//! Error types for engine construction and task submission.

use std::fmt;

use gridloop_core::GridError;

/// Errors that can occur while setting up or starting an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The worker pool was configured with zero capacity.
    InvalidWorkerCount(usize),
    /// Grid construction failed.
    Grid(GridError),
    /// The worker pool has shut down and cannot accept the loop task.
    PoolClosed,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidWorkerCount(n) => {
                write!(f, "worker pool capacity must be positive, got {}", n)
            }
            EngineError::Grid(e) => write!(f, "{}", e),
            EngineError::PoolClosed => write!(f, "worker pool is closed"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        EngineError::Grid(e)
    }
}
