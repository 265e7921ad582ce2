//! Store-agnostic document model produced by the synthesizer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Key of the identifier field.
pub const ID_FIELD: &str = "_id";

/// Value kind assigned to a generated field by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Current time as nanoseconds since the Unix epoch.
    NowNanos,
    /// Random calendar timestamp.
    RandomTimestamp,
    /// Random integer in `[0, 1000)`.
    SmallInt,
    /// Random float in `[0, 1)`.
    UnitFloat,
    /// Person name.
    Name,
    /// Email address.
    Email,
    /// Single word.
    Word,
}

impl FieldKind {
    /// Positional typing rule: indices 0..=5 are literal, everything else is a word.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => FieldKind::NowNanos,
            1 => FieldKind::RandomTimestamp,
            2 => FieldKind::SmallInt,
            3 => FieldKind::UnitFloat,
            4 => FieldKind::Name,
            5 => FieldKind::Email,
            _ => FieldKind::Word,
        }
    }
}

/// A single field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int64(i64),
    Float64(f64),
    DateTime(DateTime<Utc>),
    String(String),
    Binary(Vec<u8>),
}

/// One synthetic document: an identifier plus named fields in insertion order.
///
/// Documents are built once, handed to the store and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDocument {
    id: Uuid,
    fields: Vec<(String, FieldValue)>,
}

impl SyntheticDocument {
    pub(crate) fn new(id: Uuid, fields: Vec<(String, FieldValue)>) -> Self {
        Self { id, fields }
    }

    /// Unique identifier of this document.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        key == ID_FIELD || self.get(key).is_some()
    }

    /// Total number of keys, including the identifier.
    pub fn key_count(&self) -> usize {
        self.fields.len() + 1
    }

    /// All keys, identifier first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(ID_FIELD).chain(self.fields.iter().map(|(k, _)| k.as_str()))
    }

    /// Non-identifier fields in insertion order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Split into identifier and fields.
    pub fn into_parts(self) -> (Uuid, Vec<(String, FieldValue)>) {
        (self.id, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_index() {
        assert_eq!(FieldKind::for_index(0), FieldKind::NowNanos);
        assert_eq!(FieldKind::for_index(1), FieldKind::RandomTimestamp);
        assert_eq!(FieldKind::for_index(2), FieldKind::SmallInt);
        assert_eq!(FieldKind::for_index(3), FieldKind::UnitFloat);
        assert_eq!(FieldKind::for_index(4), FieldKind::Name);
        assert_eq!(FieldKind::for_index(5), FieldKind::Email);
        // no wrap-around past the literal rules
        assert_eq!(FieldKind::for_index(6), FieldKind::Word);
        assert_eq!(FieldKind::for_index(8), FieldKind::Word);
        assert_eq!(FieldKind::for_index(12), FieldKind::Word);
    }

    #[test]
    fn test_document_lookup() {
        let doc = SyntheticDocument::new(
            Uuid::now_v7(),
            vec![
                ("i0".to_string(), FieldValue::Int64(7)),
                ("i1".to_string(), FieldValue::String("x".to_string())),
            ],
        );

        assert_eq!(doc.key_count(), 3);
        assert!(doc.contains_key(ID_FIELD));
        assert!(doc.contains_key("i1"));
        assert!(!doc.contains_key("i2"));
        assert_eq!(doc.get("i0"), Some(&FieldValue::Int64(7)));
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["_id", "i0", "i1"]);
    }
}
