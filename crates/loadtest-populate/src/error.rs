//! Error types for a load run.

use crate::store::StoreError;
use loadtest_generator::GeneratorError;
use thiserror::Error;

/// Errors that abort a load run. None of them is recovered locally.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Invalid configuration, reported before any worker starts.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store failure outside the insert loop (connect, empty, close).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An insert failed; the measurement is invalid.
    #[error("Worker '{worker}' insert failed: {source}")]
    Insert {
        worker: String,
        #[source]
        source: StoreError,
    },

    /// A document could not be synthesized.
    #[error("Worker '{worker}' failed to generate a document: {source}")]
    Generator {
        worker: String,
        #[source]
        source: GeneratorError,
    },

    /// A worker task panicked or was cancelled by the runtime.
    #[error("Worker task failed: {0}")]
    WorkerTask(String),
}
