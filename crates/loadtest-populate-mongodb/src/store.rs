//! [`StoreClient`] implementation backed by the MongoDB driver.

use crate::error::MongoDBPopulatorError;
use crate::insert::{count_documents, drop_collection, insert_document};
use bson::{doc, Bson, Document};
use loadtest_generator::SyntheticDocument;
use loadtest_populate::{Namespace, StoreClient, StoreError};
use mongodb::{Client, Collection};
use tracing::{debug, info};

/// Shared MongoDB client; the driver pools connections internally, so one
/// instance serves every worker.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Connect to MongoDB and verify the server answers a `ping`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = MongoStore::connect("mongodb://localhost:27017").await?;
    /// ```
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let store = Self::open(uri)
            .await
            .map_err(MongoDBPopulatorError::into_connection)?;
        info!("Connected to MongoDB");
        Ok(store)
    }

    async fn open(uri: &str) -> Result<Self, MongoDBPopulatorError> {
        let client = Client::with_uri_str(uri).await?;

        // Test connection
        let reply = client.database("admin").run_command(doc! { "ping": 1 }).await?;
        match reply.get("ok") {
            Some(Bson::Double(ok)) if *ok == 1.0 => {}
            Some(Bson::Int32(1)) | Some(Bson::Int64(1)) => {}
            other => {
                return Err(MongoDBPopulatorError::Ping(format!(
                    "unexpected ping reply: {other:?}"
                )))
            }
        }

        Ok(Self { client })
    }

    fn collection(&self, namespace: &Namespace) -> Collection<Document> {
        self.client
            .database(&namespace.database)
            .collection(&namespace.collection)
    }

    /// Get the document count for a namespace.
    pub async fn document_count(&self, namespace: &Namespace) -> Result<u64, StoreError> {
        count_documents(&self.collection(namespace))
            .await
            .map_err(MongoDBPopulatorError::into_admin)
    }
}

#[async_trait::async_trait]
impl StoreClient for MongoStore {
    async fn insert_one(
        &self,
        namespace: &Namespace,
        document: SyntheticDocument,
    ) -> Result<(), StoreError> {
        insert_document(&self.collection(namespace), document)
            .await
            .map_err(MongoDBPopulatorError::into_insert)
    }

    async fn empty(&self, namespace: &Namespace) -> Result<(), StoreError> {
        info!("Dropping collection: {}", namespace);
        drop_collection(&self.collection(namespace))
            .await
            .map_err(MongoDBPopulatorError::into_admin)
    }

    async fn close(&self) -> Result<(), StoreError> {
        debug!("Shutting down MongoDB client");
        self.client.clone().shutdown().await;
        Ok(())
    }
}
