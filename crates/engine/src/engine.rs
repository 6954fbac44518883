//! Engine lifecycle and the game loop itself.
//!
//! The engine owns exactly one grid and one game. `start` hands both to a
//! single loop task on the worker pool and returns a [`LoopHandle`] the
//! embedding application uses to cancel, finish, and observe the loop.
//!
//! `start` consumes the engine, so a second submission while a loop task is
//! live is unrepresentable; restarting means building a new engine (or a new
//! one from the state handed back by [`LoopHandle::join`]).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, Receiver};
use gridloop_core::Grid;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::game::{Game, Step};
use crate::pool::WorkerPool;

/// How the loop task reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The finish condition was raised, by the game or through the handle.
    Finished,
    /// The loop was cancelled through [`LoopHandle::stop`].
    Stopped,
}

/// Final state handed back once the loop task ends cleanly.
#[derive(Debug)]
pub struct Completed<G> {
    pub outcome: LoopOutcome,
    pub game: G,
    pub grid: Grid,
}

/// The abstract driver: owns the grid, the game, and the worker pool.
#[derive(Debug)]
pub struct Engine<G: Game> {
    game: G,
    grid: Grid,
    pool: WorkerPool,
    running: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

impl<G: Game + 'static> Engine<G> {
    /// Build an engine around `game` with a square grid of
    /// `config.grid_size` and a worker pool of `config.max_workers`.
    pub fn new(game: G, config: EngineConfig) -> Result<Self, EngineError> {
        if config.max_workers == 0 {
            return Err(EngineError::InvalidWorkerCount(config.max_workers));
        }
        let grid = Grid::new(config.grid_size, config.grid_size, config.has_border)?;

        Ok(Self {
            game,
            grid,
            pool: WorkerPool::new(config.max_workers),
            running: Arc::new(AtomicBool::new(false)),
            finished: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The playable area, for seeding before the loop starts.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the playable area before the loop starts.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Begin asynchronous looping.
    ///
    /// Sets `running`, submits the loop task to the worker pool, and returns
    /// without waiting for the loop to begin or complete. The grid and game
    /// move to the worker for the lifetime of the loop.
    pub fn start(self) -> Result<LoopHandle<G>, EngineError> {
        let Self {
            mut game,
            mut grid,
            pool,
            running,
            finished,
        } = self;

        running.store(true, Ordering::Relaxed);

        let (done_tx, done_rx) = bounded(1);
        let loop_running = Arc::clone(&running);
        let loop_finished = Arc::clone(&finished);

        pool.submit(Box::new(move || {
            let result = run_loop(&mut game, &mut grid, &loop_running, &loop_finished);
            // A dead loop is never left looking alive, failure included.
            loop_running.store(false, Ordering::Relaxed);

            let report = match result {
                Ok(outcome) => {
                    log::debug!("game loop ended: {:?}", outcome);
                    Ok(Completed {
                        outcome,
                        game,
                        grid,
                    })
                }
                Err(e) => {
                    log::warn!("game loop terminated with error: {:#}", e);
                    Err(e)
                }
            };
            let _ = done_tx.send(report);
        }))?;

        log::debug!("game loop submitted to worker pool");

        Ok(LoopHandle {
            running,
            finished,
            done_rx,
            _pool: pool,
        })
    }
}

/// The loop body, executed on a pool worker.
///
/// Two states: looping while `running`, stopped once `running` clears or the
/// finish condition is observed. The finish check happens once per
/// iteration, after the `update` + `render` pair, so raising it mid-iteration
/// still yields the render for that iteration.
fn run_loop<G: Game>(
    game: &mut G,
    grid: &mut Grid,
    running: &AtomicBool,
    finished: &AtomicBool,
) -> Result<LoopOutcome> {
    while running.load(Ordering::Relaxed) {
        let step = game.update(grid).context("update step failed")?;
        game.render(grid).context("render step failed")?;

        if step == Step::Finished {
            finished.store(true, Ordering::Relaxed);
        }
        if finished.load(Ordering::Relaxed) {
            return Ok(LoopOutcome::Finished);
        }
    }
    Ok(LoopOutcome::Stopped)
}

/// Control surface for a submitted loop task.
///
/// Keeps the worker pool alive for as long as the caller can still observe
/// the loop. Dropping the handle cancels the loop and waits for the worker
/// to wind down; to see the outcome instead, call [`LoopHandle::join`].
pub struct LoopHandle<G> {
    running: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
    done_rx: Receiver<Result<Completed<G>>>,
    _pool: WorkerPool,
}

impl<G> LoopHandle<G> {
    /// Cooperative cancellation: takes effect at the next iteration
    /// boundary, never mid-iteration.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Raise the finish condition from outside the loop.
    pub fn finish(&self) {
        self.finished.store(true, Ordering::Relaxed);
    }

    /// Whether the loop task is still live.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Block until the loop task ends and hand back its final state.
    ///
    /// A failure inside `update` or `render` surfaces here as the error the
    /// game produced, with the failing step named in the context chain.
    pub fn join(self) -> Result<Completed<G>> {
        match self.done_rx.recv() {
            Ok(report) => report,
            Err(_) => Err(anyhow!("loop task ended without reporting an outcome")),
        }
    }
}

impl<G> Drop for LoopHandle<G> {
    fn drop(&mut self) {
        // An abandoned handle must not leave the pool join waiting on a loop
        // nobody can cancel anymore.
        self.running.store(false, Ordering::Relaxed);
    }
}
