//! mongo-perf-inspect library
//!
//! Measures raw MongoDB insert throughput: a fixed pool of workers
//! synthesizes documents of a configurable shape and inserts them one at a
//! time until a wall-clock deadline passes.
//!
//! # CLI Usage
//!
//! ```bash
//! # 8 workers for five minutes, 20-field documents with a binary blob
//! mongo-perf-inspect \
//!   --mongodb-uri mongodb://localhost:27017 \
//!   --namespace perf.docs \
//!   --workers 8 --duration 5m --num-fields 20 --binary 1
//!
//! # Show what a document looks like without connecting
//! mongo-perf-inspect --num-fields 8 --print-doc
//! ```
//!
//! # Crates
//!
//! - `loadtest_generator` - document synthesizer
//! - `loadtest_populate` - store interface, worker pool, run entry point
//! - `loadtest_populate_mongodb` - MongoDB store client

use anyhow::Context;
use loadtest_generator::{DocumentSynthesizer, ShapeDescriptor};
use loadtest_populate::{run_load, LoadPlan, Namespace, StoreClient, WorkerReport};
use loadtest_populate_mongodb::{document_to_extjson, MongoDBLoadArgs, MongoStore};
use std::sync::Arc;
use tracing::info_span;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod config;

pub use cli::{Cli, LogFormat};

/// Install the global tracing subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Shape every document of the run will have.
pub fn shape_from_args(args: &MongoDBLoadArgs) -> ShapeDescriptor {
    ShapeDescriptor::new(args.common.num_fields)
        .with_nesting_depth(args.common.depth)
        .with_binary_blob_size(args.common.binary)
}

/// Resolve and validate CLI arguments into a [`LoadPlan`].
pub fn load_plan(args: &MongoDBLoadArgs) -> anyhow::Result<LoadPlan> {
    let namespace: Namespace = args.namespace.parse()?;
    let duration = crate::config::parse_duration(&args.common.duration)
        .with_context(|| format!("Invalid --duration '{}'", args.common.duration))?;

    let plan = LoadPlan::new(
        namespace,
        args.common.workers,
        duration,
        shape_from_args(args),
    )
    .with_identity_start(args.common.thread_id_start)
    .with_embedded_identity(!args.common.no_worker_id)
    .with_empty_first(args.common.empty);

    plan.validate()?;
    Ok(plan)
}

/// One document for the configured shape, as relaxed extended JSON.
///
/// Uses the first worker identity when identities are embedded.
pub fn sample_document(plan: &LoadPlan) -> anyhow::Result<serde_json::Value> {
    let identity = format!("worker-{}", plan.identity_start);
    let identity = plan.embed_identity.then_some(identity.as_str());
    let document = DocumentSynthesizer::new(plan.shape)
        .synthesize(identity)
        .context("Failed to synthesize sample document")?;
    Ok(document_to_extjson(document))
}

/// Execute the command described by `cli`.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let args = &cli.mongodb;
    let plan = load_plan(args)?;

    if args.common.print_doc {
        let sample = sample_document(&plan)?;
        println!("{}", serde_json::to_string_pretty(&sample)?);
        return Ok(());
    }

    tracing::info!("mongo-perf-inspect starting: {:?}", plan);

    let store = Arc::new(
        MongoStore::connect(&args.mongodb_uri)
            .await
            .context("Failed to connect to MongoDB")?,
    );

    let span = info_span!("load", namespace = %plan.namespace);
    let outcome = run_load(store.clone(), &plan, span).await;
    let closed = store.close().await;

    let summary = outcome.context("Load run aborted")?;
    closed.context("Failed to close MongoDB connection")?;

    for WorkerReport {
        identity,
        documents_inserted,
        elapsed,
        ..
    } in &summary.workers
    {
        tracing::info!("{}: {} documents in {:?}", identity, documents_inserted, elapsed);
    }

    tracing::info!(
        "Inserted {} documents into {} in {:?} ({:.2} docs/sec)",
        summary.documents_inserted(),
        plan.namespace,
        summary.total_duration,
        summary.documents_per_second()
    );

    Ok(())
}
