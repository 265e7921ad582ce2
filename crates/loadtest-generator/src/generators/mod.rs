//! Individual value generators for the positional field kinds.
//!
//! Each kind maps to exactly one generator; the dispatch lives in
//! [`generate_value`].

pub mod binary;
pub mod numeric;
pub mod text;
pub mod timestamp;
pub mod uuid;

use crate::document::{FieldKind, FieldValue};
use rand::Rng;

/// Generate a value of the given kind.
pub fn generate_value<R: Rng + ?Sized>(kind: FieldKind, rng: &mut R) -> FieldValue {
    match kind {
        FieldKind::NowNanos => timestamp::generate_now_nanos(),
        FieldKind::RandomTimestamp => timestamp::generate_random_timestamp(rng),
        FieldKind::SmallInt => numeric::generate_int_below(rng, 1000),
        FieldKind::UnitFloat => numeric::generate_unit_float(rng),
        FieldKind::Name => text::generate_name(rng),
        FieldKind::Email => text::generate_email(rng),
        FieldKind::Word => text::generate_word(rng),
    }
}
