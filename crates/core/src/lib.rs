//! Core grid module - pure, deterministic, and testable
//!
//! This crate owns the playable-area buffer and nothing else. It has zero
//! dependencies on threading, UI, or I/O, making it:
//!
//! - **Deterministic**: construction fully initializes every cell
//! - **Testable**: the buffer invariants are plain data assertions
//! - **Portable**: usable from any render/update collaborator
//!
//! # Module Structure
//!
//! - [`grid`]: the fixed-size character buffer with optional border frame
//! - [`error`]: construction error kinds
//!
//! # Example
//!
//! ```
//! use gridloop_core::Grid;
//!
//! let mut grid = Grid::new(3, 3, true).unwrap();
//! assert_eq!(grid.width(), 5);
//! assert_eq!(grid.get(0, 0), Some('-'));
//!
//! grid.set(1, 1, '@');
//! assert_eq!(grid.get(1, 1), Some('@'));
//! ```

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
