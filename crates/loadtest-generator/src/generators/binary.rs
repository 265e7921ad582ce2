//! Binary blob generator backed by the OS entropy source.

use crate::document::FieldValue;
use crate::generator::GeneratorError;

/// Fill a blob of `len` bytes from the OS entropy source.
///
/// Fails rather than returning a short or zeroed blob.
pub fn generate_blob(len: usize) -> Result<FieldValue, GeneratorError> {
    let mut bytes = vec![0u8; len];
    getrandom::fill(&mut bytes)?;
    Ok(FieldValue::Binary(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_blob_length() {
        let FieldValue::Binary(bytes) = generate_blob(32).unwrap() else {
            panic!("Expected Binary value");
        };
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_blobs_differ() {
        assert_ne!(generate_blob(32).unwrap(), generate_blob(32).unwrap());
    }
}
