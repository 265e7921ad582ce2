//! BSON conversion and single-document writes.

use crate::error::MongoDBPopulatorError;
use bson::spec::BinarySubtype;
use bson::{doc, Binary, Bson, DateTime as BsonDateTime, Document};
use loadtest_generator::{FieldValue, SyntheticDocument, ID_FIELD};
use mongodb::Collection;
use uuid::Uuid;

/// Wrapper for BSON values that can be inserted into MongoDB.
#[derive(Debug, Clone)]
pub struct BsonValue(pub Bson);

impl BsonValue {
    /// Get the inner BSON value.
    pub fn into_inner(self) -> Bson {
        self.0
    }
}

impl From<FieldValue> for BsonValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Int64(i) => BsonValue(Bson::Int64(i)),
            FieldValue::Float64(f) => BsonValue(Bson::Double(f)),
            FieldValue::DateTime(dt) => BsonValue(Bson::DateTime(BsonDateTime::from_chrono(dt))),
            FieldValue::String(s) => BsonValue(Bson::String(s)),
            FieldValue::Binary(bytes) => BsonValue(Bson::Binary(Binary {
                subtype: BinarySubtype::Generic,
                bytes,
            })),
        }
    }
}

impl From<Uuid> for BsonValue {
    fn from(id: Uuid) -> Self {
        BsonValue(Bson::Binary(Binary {
            subtype: BinarySubtype::Uuid,
            bytes: id.as_bytes().to_vec(),
        }))
    }
}

/// Convert a synthetic document to a BSON document, `_id` first.
pub fn document_to_bson(document: SyntheticDocument) -> Document {
    let (id, fields) = document.into_parts();
    let mut doc = Document::new();

    doc.insert(ID_FIELD, BsonValue::from(id).into_inner());
    for (key, value) in fields {
        doc.insert(key, BsonValue::from(value).into_inner());
    }

    doc
}

/// Render a synthetic document as relaxed extended JSON.
pub fn document_to_extjson(document: SyntheticDocument) -> serde_json::Value {
    Bson::Document(document_to_bson(document)).into_relaxed_extjson()
}

/// Insert a single document.
pub async fn insert_document(
    collection: &Collection<Document>,
    document: SyntheticDocument,
) -> Result<(), MongoDBPopulatorError> {
    collection.insert_one(document_to_bson(document)).await?;
    Ok(())
}

/// Drop a collection if it exists.
pub async fn drop_collection(
    collection: &Collection<Document>,
) -> Result<(), MongoDBPopulatorError> {
    collection.drop().await?;
    Ok(())
}

/// Get the document count for a collection.
pub async fn count_documents(
    collection: &Collection<Document>,
) -> Result<u64, MongoDBPopulatorError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}
