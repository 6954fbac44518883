//! The capability set every concrete game supplies.

use anyhow::Result;
use gridloop_core::Grid;

/// What the loop should do after an update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep looping.
    Continue,
    /// Raise the finish condition; the loop performs the render for this
    /// iteration and then stops.
    Finished,
}

/// Update/render behavior driven by the engine loop.
///
/// The engine guarantees only ordering and repetition: `update` then
/// `render`, once per iteration, never concurrently with each other. Errors
/// returned from either method are opaque to the engine and fatal to the
/// loop task.
///
/// `Send` is required because the loop runs on a background worker.
pub trait Game: Send {
    /// Advance the game by one iteration, mutating the grid as needed.
    fn update(&mut self, grid: &mut Grid) -> Result<Step>;

    /// Present the current grid. Runs immediately after `update`.
    fn render(&mut self, grid: &Grid) -> Result<()>;
}
