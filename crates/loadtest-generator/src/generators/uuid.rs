//! Document identifier generator.

use uuid::Uuid;

/// Generate a fresh document identifier.
///
/// UUID v7: millisecond timestamp, a counter that keeps ids monotonic within
/// one millisecond, and random bits. Unique across workers and processes.
pub fn generate_document_id() -> Uuid {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_document_id_version() {
        assert_eq!(generate_document_id().get_version_num(), 7);
    }

    #[test]
    fn test_document_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| (0..1000).map(|_| generate_document_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 4000);
    }
}
