//! Error types for schema inspection and descriptor derivation.
//!
//! Derivation failures are configuration mistakes in the model schema,
//! so they carry the dotted path of the offending field and are meant to
//! surface at startup, not at validation time.

/// Fatal configuration errors raised while deriving a descriptor tree.
///
/// Any of these aborts the derivation of the whole schema; no partial
/// descriptor is produced or cached.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    /// Array field without a resolvable element definition
    #[error("Field '{path}' declares an array without a resolvable element kind")]
    MissingElementKind { path: String },

    /// Array element kind that cannot be expressed as a scalar descriptor
    #[error("Field '{path}' declares array elements of kind '{kind}', which cannot nest")]
    InvalidElementKind {
        path: String,
        kind: crate::schema::FieldKind,
    },

    /// Field flagged as a nested sub-schema but missing its field collection
    #[error("Field '{path}' is marked as a sub-schema but carries no field collection")]
    MissingSubSchema { path: String },

    /// Dotted field name whose synthetic prefix collides with a real field
    #[error("Field '{path}' collides with the existing entry '{name}'")]
    NestedNameCollision { path: String, name: String },
}

/// Errors surfaced by the schema registry and the memoizing inspector.
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    /// Descriptor derivation failed for a registered schema
    #[error("Derivation error: {0}")]
    Derive(#[from] DeriveError),

    /// Schema not found in the registry
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while loading schema files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violations, e.g. a poisoned cache lock
    #[error("Internal error: {message}")]
    Internal { message: String },
}

// Convenience methods for creating common errors
impl DeriveError {
    /// Create a missing element kind error
    pub fn missing_element_kind(path: impl Into<String>) -> Self {
        Self::MissingElementKind { path: path.into() }
    }

    /// Create an invalid element kind error
    pub fn invalid_element_kind(path: impl Into<String>, kind: crate::schema::FieldKind) -> Self {
        Self::InvalidElementKind {
            path: path.into(),
            kind,
        }
    }

    /// Create a missing sub-schema error
    pub fn missing_sub_schema(path: impl Into<String>) -> Self {
        Self::MissingSubSchema { path: path.into() }
    }

    /// Create a nested name collision error
    pub fn nested_name_collision(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NestedNameCollision {
            path: path.into(),
            name: name.into(),
        }
    }
}

impl InspectorError {
    /// Create a schema not found error
    pub fn schema_not_found(name: impl Into<String>) -> Self {
        Self::SchemaNotFound { name: name.into() }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type DeriveResult<T> = Result<T, DeriveError>;
pub type InspectorResult<T> = Result<T, InspectorError>;
