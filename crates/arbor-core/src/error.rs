//! Error types for arbor.

/// Result type alias for arbor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the item model.
///
/// Every failure here is a local, synchronous contract violation. Operations
/// are atomic: they either complete their mutation (including identifier
/// re-derivation) or fail before touching any state. Nothing is retried
/// internally; callers decide whether to catch, log, or propagate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A positional operation was given an index outside the valid bound.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value of the wrong kind was supplied to a typed property.
    #[error("type mismatch for property '{property}': expected {expected}, got {got}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        got: &'static str,
    },

    /// A property name the entity does not recognize.
    #[error("unknown property '{name}' on {entity}")]
    UnknownProperty { entity: &'static str, name: String },

    /// A write to a derived, read-only property.
    #[error("property '{name}' on {entity} is read-only")]
    ReadOnly { entity: &'static str, name: String },
}

impl Error {
    /// Create an index error for a collection of the given length.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a type-mismatch error for a property.
    pub fn type_mismatch(
        property: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            property: property.into(),
            expected,
            got,
        }
    }

    /// Create an unknown-property error.
    pub fn unknown_property(entity: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownProperty {
            entity,
            name: name.into(),
        }
    }

    /// Create a read-only error.
    pub fn read_only(entity: &'static str, name: impl Into<String>) -> Self {
        Self::ReadOnly {
            entity,
            name: name.into(),
        }
    }
}
