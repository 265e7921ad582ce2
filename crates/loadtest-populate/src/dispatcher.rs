//! Worker pool: fan out N workers, wait for all of them.

use crate::error::LoadError;
use crate::metrics::{RunSummary, WorkerReport};
use crate::namespace::Namespace;
use crate::store::StoreClient;
use crate::worker::Worker;
use loadtest_generator::{DocumentSynthesizer, ShapeDescriptor};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, Span};

/// Spawns one [`Worker`] per identity and blocks until every one is done.
///
/// Workers share the store through an `Arc` and nothing else. The pool's
/// only synchronization is the completion barrier in [`Dispatcher::execute`].
pub struct Dispatcher {
    store: Arc<dyn StoreClient>,
    namespace: Namespace,
    synthesizer: DocumentSynthesizer,
    identity_start: usize,
    embed_identity: bool,
    span: Span,
}

impl Dispatcher {
    /// Create a dispatcher writing documents of `shape` into `namespace`.
    ///
    /// `span` is the logging context handed to every worker; each worker
    /// runs in a child span carrying its identity.
    pub fn new(
        store: Arc<dyn StoreClient>,
        namespace: Namespace,
        shape: ShapeDescriptor,
        span: Span,
    ) -> Self {
        Self {
            store,
            namespace,
            synthesizer: DocumentSynthesizer::new(shape),
            identity_start: 0,
            embed_identity: true,
            span,
        }
    }

    /// Offset added to every worker identity (`worker-<start + i>`).
    pub fn with_identity_start(mut self, start: usize) -> Self {
        self.identity_start = start;
        self
    }

    /// Whether workers embed their identity into documents (default: true).
    pub fn with_embedded_identity(mut self, embed: bool) -> Self {
        self.embed_identity = embed;
        self
    }

    /// Identities for a pool of `worker_count` workers.
    ///
    /// Fails when `identity_start + i` does not fit in a `usize`.
    pub fn worker_identities(&self, worker_count: usize) -> Result<Vec<String>, LoadError> {
        (0..worker_count)
            .map(|i| {
                self.identity_start
                    .checked_add(i)
                    .map(|n| format!("worker-{n}"))
                    .ok_or_else(|| {
                        LoadError::Config(format!(
                            "Worker identity start {} overflows with {} workers",
                            self.identity_start, worker_count
                        ))
                    })
            })
            .collect()
    }

    /// Run `worker_count` workers until `deadline`.
    ///
    /// Returns only after every worker has finished. On the first worker
    /// error the remaining workers are aborted and awaited before the error
    /// is returned, so no task outlives this call.
    pub async fn execute(
        &self,
        worker_count: usize,
        deadline: Instant,
    ) -> Result<RunSummary, LoadError> {
        if worker_count == 0 {
            return Err(LoadError::Config(
                "Worker count must be at least 1".to_string(),
            ));
        }

        let identities = self.worker_identities(worker_count)?;
        let start_time = Instant::now();
        let mut workers = JoinSet::new();

        info!(
            parent: &self.span,
            workers = worker_count,
            namespace = %self.namespace,
            "Starting workers"
        );

        for (ordinal, identity) in identities.into_iter().enumerate() {
            let span = info_span!(parent: &self.span, "worker", id = %identity);
            let worker = Worker::new(
                ordinal,
                identity,
                self.synthesizer,
                Arc::clone(&self.store),
                self.namespace.clone(),
                span,
            )
            .with_embedded_identity(self.embed_identity);

            workers.spawn(worker.run(deadline));
        }

        let mut reports: Vec<WorkerReport> = Vec::with_capacity(worker_count);

        while let Some(joined) = workers.join_next().await {
            let failure = match joined {
                Ok(Ok(report)) => {
                    reports.push(report);
                    continue;
                }
                Ok(Err(e)) => e,
                Err(join_error) => LoadError::WorkerTask(join_error.to_string()),
            };

            error!(parent: &self.span, error = %failure, "Aborting run");
            workers.shutdown().await;
            return Err(failure);
        }

        reports.sort_by_key(|report| report.ordinal);

        let summary = RunSummary {
            workers: reports,
            total_duration: start_time.elapsed(),
        };

        info!(
            parent: &self.span,
            documents = summary.documents_inserted(),
            "All {} workers finished in {:?} ({:.2} docs/sec)",
            summary.workers.len(),
            summary.total_duration,
            summary.documents_per_second()
        );

        Ok(summary)
    }
}
