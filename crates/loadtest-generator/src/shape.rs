//! Shape of the documents produced during a load run.

/// Length in bytes of the binary field.
///
/// The configured blob size only switches the field on; the generated blob
/// always has this length.
pub const BINARY_BLOB_LEN: usize = 32;

/// Describes how every document of a run is shaped.
///
/// Built once per run from validated configuration and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeDescriptor {
    /// Number of positional `iN` fields.
    pub field_count: usize,
    /// Requested nesting depth. Accepted but not applied to document structure.
    pub nesting_depth: usize,
    /// Binary blob size; `0` disables the binary field.
    pub binary_blob_size: usize,
}

impl ShapeDescriptor {
    /// Create a flat shape with `field_count` generated fields and no extras.
    pub fn new(field_count: usize) -> Self {
        Self {
            field_count,
            ..Self::default()
        }
    }

    pub fn with_nesting_depth(mut self, depth: usize) -> Self {
        self.nesting_depth = depth;
        self
    }

    pub fn with_binary_blob_size(mut self, size: usize) -> Self {
        self.binary_blob_size = size;
        self
    }

    /// Whether documents carry the binary and identity extras at all.
    ///
    /// Extras ride along with the generated fields: a shape without
    /// generated fields yields documents holding only `_id`.
    pub fn has_extras(&self) -> bool {
        self.field_count > 0
    }

    /// Whether documents carry the binary field.
    pub fn has_binary(&self) -> bool {
        self.has_extras() && self.binary_blob_size != 0
    }

    /// Key of the binary field, `i{field_count + 1}`.
    pub fn binary_key(&self) -> String {
        format!("i{}", self.field_count + 1)
    }

    /// Key of the worker identity field, `i{field_count + 2}`.
    pub fn identity_key(&self) -> String {
        format!("i{}", self.field_count + 2)
    }
}
