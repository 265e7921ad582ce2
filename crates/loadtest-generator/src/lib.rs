//! Synthetic document generator for mongo-perf-inspect.
//!
//! This crate turns a [`ShapeDescriptor`] into a [`SyntheticDocument`]. The
//! *kind* of every generated field is fixed by its position, while the
//! *content* is randomized on each call.
//!
//! # Architecture
//!
//! ```text
//! ShapeDescriptor { field_count, nesting_depth, binary_blob_size }
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  DocumentSynthesizer │ ◄── worker identity (optional)
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    SyntheticDocument { _id, i0 .. i(n-1), i(n+1)?, i(n+2)? }
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_generator::{DocumentSynthesizer, ShapeDescriptor};
//!
//! let shape = ShapeDescriptor::new(6).with_binary_blob_size(1);
//! let synthesizer = DocumentSynthesizer::new(shape);
//! let doc = synthesizer.synthesize(Some("worker-0")).unwrap();
//! assert_eq!(doc.key_count(), 9);
//! ```
//!
//! # Positional rules
//!
//! | index | kind |
//! |---|---|
//! | 0 | current time, nanoseconds since the Unix epoch |
//! | 1 | random calendar timestamp |
//! | 2 | random integer in `[0, 1000)` |
//! | 3 | random float in `[0, 1)` |
//! | 4 | person name |
//! | 5 | email address |
//! | 6+ | single word |

pub mod document;
pub mod generator;
pub mod generators;
pub mod shape;

// Re-exports for convenience
pub use document::{FieldKind, FieldValue, SyntheticDocument, ID_FIELD};
pub use generator::{DocumentSynthesizer, GeneratorError};
pub use shape::{ShapeDescriptor, BINARY_BLOB_LEN};
