//! MongoDB store client for mongo-perf-inspect.
//!
//! - [`MongoStore`] implements [`loadtest_populate::StoreClient`] on top of
//!   the official driver
//! - [`insert`] converts synthetic documents to BSON and performs the writes
//! - [`MongoDBLoadArgs`] holds the connection flags for the CLI

pub mod args;
pub mod error;
pub mod insert;
pub mod store;

pub use args::MongoDBLoadArgs;
pub use error::MongoDBPopulatorError;
pub use insert::{document_to_bson, document_to_extjson, BsonValue};
pub use store::MongoStore;
