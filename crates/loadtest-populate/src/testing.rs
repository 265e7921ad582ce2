//! In-memory store used by the worker and dispatcher tests.

use crate::namespace::Namespace;
use crate::store::{StoreClient, StoreError};
use loadtest_generator::SyntheticDocument;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub(crate) struct RecordedInsert {
    pub namespace: Namespace,
    pub document: SyntheticDocument,
    pub started_at: Instant,
}

/// Records every insert; optionally fails once `fail_after` inserts succeeded.
#[derive(Default)]
pub(crate) struct RecordingStore {
    inserts: Mutex<Vec<RecordedInsert>>,
    fail_after: Option<usize>,
    insert_latency: Duration,
    emptied: AtomicBool,
    closed: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.insert_latency = latency;
        self
    }

    pub fn inserts(&self) -> std::sync::MutexGuard<'_, Vec<RecordedInsert>> {
        self.inserts.lock().unwrap()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts().len()
    }

    pub fn was_emptied(&self) -> bool {
        self.emptied.load(Ordering::SeqCst)
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl StoreClient for RecordingStore {
    async fn insert_one(
        &self,
        namespace: &Namespace,
        document: SyntheticDocument,
    ) -> Result<(), StoreError> {
        let started_at = Instant::now();
        if self.insert_latency.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.insert_latency).await;
        }

        let mut inserts = self.inserts.lock().unwrap();
        if self.fail_after.is_some_and(|n| inserts.len() >= n) {
            return Err(StoreError::Insert("simulated duplicate key".into()));
        }
        inserts.push(RecordedInsert {
            namespace: namespace.clone(),
            document,
            started_at,
        });
        Ok(())
    }

    async fn empty(&self, _namespace: &Namespace) -> Result<(), StoreError> {
        self.inserts.lock().unwrap().clear();
        self.emptied.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
