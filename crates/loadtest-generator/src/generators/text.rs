//! Synthetic text: person names, email addresses and single words.

use crate::document::FieldValue;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

pub fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    FieldValue::String(Name().fake_with_rng(rng))
}

pub fn generate_email<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    FieldValue::String(SafeEmail().fake_with_rng(rng))
}

pub fn generate_word<R: Rng + ?Sized>(rng: &mut R) -> FieldValue {
    FieldValue::String(Word().fake_with_rng(rng))
}
