//! Common CLI argument definitions shared by all store backends.

use clap::Args;

/// Arguments describing the load itself, independent of the target database.
#[derive(Args, Clone, Debug)]
pub struct CommonLoadArgs {
    /// Number of concurrent workers
    #[arg(long, default_value = "1")]
    pub workers: usize,

    /// Test duration: plain seconds ("180") or with a unit ("30s", "5m", "1h")
    #[arg(long, default_value = "180")]
    pub duration: String,

    /// Number of top level fields in test documents
    #[arg(long, default_value = "10")]
    pub num_fields: usize,

    /// Depth of the documents created (accepted, not applied)
    #[arg(long, default_value = "0")]
    pub depth: usize,

    /// Add a binary blob field to every document (0 = disabled)
    #[arg(long, default_value = "0")]
    pub binary: usize,

    /// Starting index for worker identities ("worker-<N>")
    #[arg(long, default_value = "0")]
    pub thread_id_start: usize,

    /// Do not embed the worker identity into documents
    #[arg(long)]
    pub no_worker_id: bool,

    /// Remove data from the collection on startup
    #[arg(long)]
    pub empty: bool,

    /// Print a sample document for the configured shape and exit
    #[arg(long)]
    pub print_doc: bool,
}
