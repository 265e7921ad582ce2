//! Numeric value generators.

use crate::document::FieldValue;
use rand::Rng;

/// Generate a random integer in `[0, upper)`.
pub fn generate_int_below<R: Rng + ?Sized>(rng: &mut R, upper: i64) -> FieldValue {
    FieldValue::Int64(rng.random_range(0..upper))
}

/// Generate a random float in `[0, 1)`.
pub fn generate_unit_float<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    FieldValue::Float64(rng.random::<f64>())
}
