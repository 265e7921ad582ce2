//! Document synthesizer producing one document per call.

use crate::document::{FieldKind, FieldValue, SyntheticDocument};
use crate::generators::{binary, generate_value, uuid};
use crate::shape::{ShapeDescriptor, BINARY_BLOB_LEN};
use rand::Rng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The OS entropy source failed while filling the binary field.
    #[error("Entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),
}

/// Builds documents of a fixed shape.
///
/// Field kinds are fixed per position; field contents come from the
/// thread-local RNG (or a caller-provided one), the binary blob from the OS
/// entropy source.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSynthesizer {
    shape: ShapeDescriptor,
}

impl DocumentSynthesizer {
    pub fn new(shape: ShapeDescriptor) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &ShapeDescriptor {
        &self.shape
    }

    /// Synthesize one document using the thread-local RNG.
    pub fn synthesize(&self, identity: Option<&str>) -> Result<SyntheticDocument, GeneratorError> {
        self.synthesize_with_rng(&mut rand::rng(), identity)
    }

    /// Synthesize one document drawing field contents from `rng`.
    ///
    /// The identifier and the binary blob never come from `rng`, so two
    /// documents built from identically seeded RNGs still differ in `_id`.
    pub fn synthesize_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        identity: Option<&str>,
    ) -> Result<SyntheticDocument, GeneratorError> {
        let shape = &self.shape;
        let identity = identity.filter(|_| shape.has_extras());
        let extras = usize::from(shape.has_binary()) + usize::from(identity.is_some());
        let mut fields = Vec::with_capacity(shape.field_count + extras);

        for index in 0..shape.field_count {
            let value = generate_value(FieldKind::for_index(index), rng);
            fields.push((format!("i{index}"), value));
        }

        if shape.has_binary() {
            fields.push((shape.binary_key(), binary::generate_blob(BINARY_BLOB_LEN)?));
        }

        if let Some(identity) = identity {
            fields.push((shape.identity_key(), FieldValue::String(identity.to_string())));
        }

        Ok(SyntheticDocument::new(uuid::generate_document_id(), fields))
    }
}
