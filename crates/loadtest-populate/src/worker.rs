//! A single worker: synthesize, insert, repeat until the deadline.

use crate::error::LoadError;
use crate::metrics::WorkerReport;
use crate::namespace::Namespace;
use crate::store::StoreClient;
use loadtest_generator::DocumentSynthesizer;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, Instrument, Span};

/// One insert loop bound to an identity.
///
/// The deadline is only checked before each iteration: an insert already in
/// flight when the deadline passes runs to completion.
pub struct Worker {
    ordinal: usize,
    identity: String,
    embed_identity: bool,
    synthesizer: DocumentSynthesizer,
    store: Arc<dyn StoreClient>,
    namespace: Namespace,
    span: Span,
}

impl Worker {
    pub fn new(
        ordinal: usize,
        identity: String,
        synthesizer: DocumentSynthesizer,
        store: Arc<dyn StoreClient>,
        namespace: Namespace,
        span: Span,
    ) -> Self {
        Self {
            ordinal,
            identity,
            embed_identity: true,
            synthesizer,
            store,
            namespace,
            span,
        }
    }

    /// Whether documents carry this worker's identity (default: true).
    pub fn with_embedded_identity(mut self, embed: bool) -> Self {
        self.embed_identity = embed;
        self
    }

    /// Run until `deadline`, returning how many documents were inserted.
    ///
    /// The first insert or generation failure ends the worker with an error.
    pub async fn run(self, deadline: Instant) -> Result<WorkerReport, LoadError> {
        let span = self.span.clone();
        self.run_loop(deadline).instrument(span).await
    }

    async fn run_loop(self, deadline: Instant) -> Result<WorkerReport, LoadError> {
        let started = Instant::now();
        let identity = self.embed_identity.then_some(self.identity.as_str());
        let mut inserted: u64 = 0;

        debug!("Worker started");

        while Instant::now() < deadline {
            let document =
                self.synthesizer
                    .synthesize(identity)
                    .map_err(|source| LoadError::Generator {
                        worker: self.identity.clone(),
                        source,
                    })?;

            trace!(id = %document.id(), "Inserting document");

            self.store
                .insert_one(&self.namespace, document)
                .await
                .map_err(|source| LoadError::Insert {
                    worker: self.identity.clone(),
                    source,
                })?;

            inserted += 1;
        }

        let elapsed = started.elapsed();
        debug!(inserted, ?elapsed, "Worker reached deadline");

        Ok(WorkerReport {
            ordinal: self.ordinal,
            identity: self.identity,
            documents_inserted: inserted,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingStore;
    use loadtest_generator::{FieldValue, ShapeDescriptor};
    use std::time::Duration;

    fn worker(store: Arc<RecordingStore>, shape: ShapeDescriptor) -> Worker {
        Worker::new(
            0,
            "worker-0".to_string(),
            DocumentSynthesizer::new(shape),
            store,
            Namespace::new("perf", "docs"),
            Span::none(),
        )
    }

    #[tokio::test]
    async fn test_expired_deadline_inserts_nothing() {
        let store = Arc::new(RecordingStore::new());
        let report = worker(store.clone(), ShapeDescriptor::new(3))
            .run(Instant::now())
            .await
            .unwrap();

        assert_eq!(report.documents_inserted, 0);
        assert_eq!(report.identity, "worker-0");
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_inserts_until_deadline() {
        let store = Arc::new(RecordingStore::new().with_latency(Duration::from_millis(5)));
        let deadline = Instant::now() + Duration::from_millis(100);

        let report = worker(store.clone(), ShapeDescriptor::new(3))
            .run(deadline)
            .await
            .unwrap();

        assert!(report.documents_inserted > 0);
        assert_eq!(report.documents_inserted as usize, store.insert_count());
        // no iteration starts at or after the deadline
        for insert in store.inserts().iter() {
            assert!(insert.started_at < deadline);
            assert_eq!(insert.namespace, Namespace::new("perf", "docs"));
        }
    }

    #[tokio::test]
    async fn test_embeds_identity() {
        let store = Arc::new(RecordingStore::new().with_latency(Duration::from_millis(5)));
        let deadline = Instant::now() + Duration::from_millis(30);

        worker(store.clone(), ShapeDescriptor::new(2))
            .run(deadline)
            .await
            .unwrap();

        let inserts = store.inserts();
        assert!(!inserts.is_empty());
        for insert in inserts.iter() {
            assert_eq!(
                insert.document.get("i4"),
                Some(&FieldValue::String("worker-0".to_string()))
            );
        }
    }

    #[tokio::test]
    async fn test_identity_not_embedded_when_disabled() {
        let store = Arc::new(RecordingStore::new().with_latency(Duration::from_millis(5)));
        let deadline = Instant::now() + Duration::from_millis(30);

        worker(store.clone(), ShapeDescriptor::new(2))
            .with_embedded_identity(false)
            .run(deadline)
            .await
            .unwrap();

        for insert in store.inserts().iter() {
            assert!(!insert.document.contains_key("i4"));
            assert_eq!(insert.document.key_count(), 3);
        }
    }

    #[tokio::test]
    async fn test_insert_failure_is_fatal() {
        let store = Arc::new(RecordingStore::failing_after(3));
        let deadline = Instant::now() + Duration::from_secs(30);

        let result = worker(store.clone(), ShapeDescriptor::new(1))
            .run(deadline)
            .await;

        match result {
            Err(LoadError::Insert { worker, .. }) => assert_eq!(worker, "worker-0"),
            other => panic!("Expected insert error, got {other:?}"),
        }
        assert_eq!(store.insert_count(), 3);
    }
}
