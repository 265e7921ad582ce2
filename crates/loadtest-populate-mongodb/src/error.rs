//! Error types for the MongoDB store client.

use loadtest_populate::StoreError;
use thiserror::Error;

/// Errors that can occur while talking to MongoDB.
#[derive(Error, Debug)]
pub enum MongoDBPopulatorError {
    /// MongoDB connection or command error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// The server did not acknowledge the connection check.
    #[error("Connection check failed: {0}")]
    Ping(String),
}

impl MongoDBPopulatorError {
    pub(crate) fn into_connection(self) -> StoreError {
        StoreError::Connection(Box::new(self))
    }

    pub(crate) fn into_insert(self) -> StoreError {
        StoreError::Insert(Box::new(self))
    }

    pub(crate) fn into_admin(self) -> StoreError {
        StoreError::Admin(Box::new(self))
    }
}
