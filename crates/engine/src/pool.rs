//! Fixed-capacity worker pool backing the engine loop.
//!
//! A handful of OS threads consume boxed jobs from a shared channel. The
//! engine only ever submits one long-lived job (the loop task); the pool
//! exists so the submission side is fire-and-forget while capacity stays
//! bounded and caller-specified.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Sender};

use crate::error::EngineError;

/// A unit of work executed on a pool thread.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Worker-execution context with fixed capacity.
///
/// Dropping the pool closes the job queue and joins every worker, so a pool
/// owner blocks until in-flight jobs have run to completion.
#[derive(Debug)]
pub struct WorkerPool {
    job_tx: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `capacity` workers. Capacity must be validated by the caller.
    pub fn new(capacity: usize) -> Self {
        let (job_tx, job_rx) = unbounded::<Job>();

        let workers = (0..capacity)
            .map(|_| {
                let rx = job_rx.clone();
                thread::spawn(move || {
                    while let Ok(job) = rx.recv() {
                        job();
                    }
                })
            })
            .collect();

        Self {
            job_tx: Some(job_tx),
            workers,
        }
    }

    /// Number of workers in the pool.
    pub fn capacity(&self) -> usize {
        self.workers.len()
    }

    /// Enqueue a job for asynchronous execution. Returns immediately.
    pub fn submit(&self, job: Job) -> Result<(), EngineError> {
        match &self.job_tx {
            Some(tx) => tx.send(job).map_err(|_| EngineError::PoolClosed),
            None => Err(EngineError::PoolClosed),
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the sender lets each worker drain and exit its recv loop.
        drop(self.job_tx.take());
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn submit_runs_job_on_worker() {
        let pool = WorkerPool::new(1);
        let (tx, rx) = mpsc::channel();

        pool.submit(Box::new(move || {
            tx.send(thread::current().id()).unwrap();
        }))
        .unwrap();

        let worker_id = rx.recv().unwrap();
        assert_ne!(worker_id, thread::current().id());
    }

    #[test]
    fn capacity_matches_requested_worker_count() {
        let pool = WorkerPool::new(3);
        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    fn drop_waits_for_submitted_jobs() {
        let (tx, rx) = mpsc::channel();
        {
            let pool = WorkerPool::new(1);
            pool.submit(Box::new(move || {
                tx.send(42u8).unwrap();
            }))
            .unwrap();
        }
        // The job must have run by the time drop returns.
        assert_eq!(rx.try_recv(), Ok(42));
    }
}
