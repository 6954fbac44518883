//! Engine configuration.

use gridloop_types::{DEFAULT_GRID_SIZE, DEFAULT_MAX_WORKERS};

/// Construction-time options for [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square playable grid.
    pub grid_size: usize,
    /// Worker-pool capacity.
    pub max_workers: usize,
    /// Whether the grid is framed with border characters.
    pub has_border: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_workers: DEFAULT_MAX_WORKERS,
            has_border: true,
        }
    }
}

impl EngineConfig {
    /// Config with the given grid size and defaults for everything else.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let grid_size = env::var("GRIDLOOP_GRID_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_GRID_SIZE);

        let max_workers = env::var("GRIDLOOP_MAX_WORKERS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_WORKERS);

        let has_border = env::var("GRIDLOOP_BORDER")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        Self {
            grid_size,
            max_workers,
            has_border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.max_workers, 1);
        assert!(config.has_border);
    }

    #[test]
    fn new_overrides_grid_size_only() {
        let config = EngineConfig::new(8);
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.max_workers, 1);
        assert!(config.has_border);
    }
}
