//! Interface to the database a load run writes into.

use crate::namespace::Namespace;
use loadtest_generator::SyntheticDocument;
use thiserror::Error;

/// Boxed driver error carried inside [`StoreError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors a [`StoreClient`] implementation can report.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not connect to the store.
    #[error("Connection error: {0}")]
    Connection(#[source] BoxError),

    /// A single insert was rejected or failed in transit.
    #[error("Insert error: {0}")]
    Insert(#[source] BoxError),

    /// Collection maintenance (emptying, closing) failed.
    #[error("Store admin error: {0}")]
    Admin(#[source] BoxError),
}

/// Insert-one capability shared by all workers of a run.
///
/// Implementations own their concurrency safety (connection pooling etc.);
/// workers call `insert_one` concurrently through a shared reference and
/// never lock around it.
#[async_trait::async_trait]
pub trait StoreClient: Send + Sync {
    /// Insert one document into `namespace`.
    async fn insert_one(
        &self,
        namespace: &Namespace,
        document: SyntheticDocument,
    ) -> Result<(), StoreError>;

    /// Remove every document from `namespace`.
    async fn empty(&self, namespace: &Namespace) -> Result<(), StoreError>;

    /// Release the underlying connection.
    async fn close(&self) -> Result<(), StoreError>;
}
