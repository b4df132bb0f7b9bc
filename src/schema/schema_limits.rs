use crate::constants::{DEFAULT_SCHEMA_MAX_DEPTH, DEFAULT_SCHEMA_MAX_LENGTH};

/// Bounds shared by schema encoding and decoding.
///
/// Decoding enforces them on untrusted bytes; encoding enforces the same
/// bounds so that encoded output always decodes under equal limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaLimits {
    /// Maximum nesting of child objects. The outermost object is depth 0.
    pub max_depth: usize,

    /// Maximum length, in bytes, of any single byte blob or nested object.
    pub max_length: usize,
}

impl SchemaLimits {
    pub fn new(max_depth: usize, max_length: usize) -> Self {
        Self {
            max_depth,
            max_length,
        }
    }
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_MAX_DEPTH, DEFAULT_SCHEMA_MAX_LENGTH)
    }
}
