//! Results of a completed load run.

use std::time::Duration;

/// Outcome of one worker that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    /// Spawn position, `0..worker_count`.
    pub ordinal: usize,
    /// Identity the worker ran under.
    pub identity: String,
    /// Number of documents this worker inserted.
    pub documents_inserted: u64,
    /// Time from the worker's start until it observed the deadline.
    pub elapsed: Duration,
}

/// Metrics from a load run that completed without error.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One report per worker, ordered by ordinal.
    pub workers: Vec<WorkerReport>,
    /// Wall time from dispatch until the last worker finished.
    pub total_duration: Duration,
}

impl RunSummary {
    pub fn documents_inserted(&self) -> u64 {
        self.workers.iter().map(|w| w.documents_inserted).sum()
    }

    /// Calculate documents per second across all workers.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_inserted() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
