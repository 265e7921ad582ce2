//! Store-agnostic load runner for mongo-perf-inspect.
//!
//! This crate holds everything between the document generator and a concrete
//! database driver:
//!
//! - [`StoreClient`] - the insert-one capability a backend must provide
//! - [`Worker`] - synthesize-and-insert loop bounded by a deadline
//! - [`Dispatcher`] - fans out N workers and waits for all of them
//! - [`run_load`] - the single entry point used by the binary
//! - [`CommonLoadArgs`] - CLI arguments shared by all backends

pub mod args;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod namespace;
pub mod plan;
pub mod store;
pub mod worker;

#[cfg(test)]
mod testing;

pub use args::CommonLoadArgs;
pub use dispatcher::Dispatcher;
pub use error::LoadError;
pub use metrics::{RunSummary, WorkerReport};
pub use namespace::Namespace;
pub use plan::{run_load, LoadPlan};
pub use store::{BoxError, StoreClient, StoreError};
pub use worker::Worker;
