//! Engine module - the game loop and its lifecycle
//!
//! The engine repeatedly invokes a game's `update` and `render` steps on a
//! background worker until a finish condition is raised or the loop is
//! cancelled. The loop is a tight synchronous iteration with no throttling;
//! pacing, if any, belongs to the concrete game.
//!
//! # Module Structure
//!
//! - [`game`]: the `Game` capability trait every concrete game implements
//! - [`engine`]: engine construction, `start`, the loop body, and the handle
//! - [`pool`]: the fixed-capacity worker pool the loop task runs on
//! - [`config`]: construction-time options
//! - [`error`]: engine error kinds
//!
//! # Example
//!
//! ```
//! use anyhow::Result;
//! use gridloop_core::Grid;
//! use gridloop_engine::{Engine, EngineConfig, Game, LoopOutcome, Step};
//!
//! struct Countdown(u32);
//!
//! impl Game for Countdown {
//!     fn update(&mut self, grid: &mut Grid) -> Result<Step> {
//!         self.0 -= 1;
//!         grid.put_str(1, 1, &self.0.to_string());
//!         Ok(if self.0 == 0 { Step::Finished } else { Step::Continue })
//!     }
//!
//!     fn render(&mut self, _grid: &Grid) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let engine = Engine::new(Countdown(3), EngineConfig::new(3)).unwrap();
//! let handle = engine.start().unwrap();
//! let done = handle.join().unwrap();
//! assert_eq!(done.outcome, LoopOutcome::Finished);
//! assert_eq!(done.game.0, 0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod pool;

pub use config::EngineConfig;
pub use engine::{Completed, Engine, LoopHandle, LoopOutcome};
pub use error::EngineError;
pub use game::{Game, Step};
pub use pool::WorkerPool;
