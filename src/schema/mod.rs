//! Document-model schema definitions: the input side of derivation.
//!
//! This module provides the typed schema model, the name-keyed registry, and
//! the content fingerprint used as the descriptor cache key.
//!
//! # Key Types
//!
//! - [`ModelSchema`] - a named, ordered collection of field definitions
//! - [`FieldDefinition`] - one field: kind, options, caster or sub-schema
//! - [`SchemaRegistry`] - registry for managing and loading schemas
//! - [`SchemaFingerprint`] - content-derived identity of a field collection
//!
//! # Examples
//!
//! ```rust
//! use schema_inspector::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = SchemaRegistry::new();
//! registry.add_schema_from_str(
//!     r#"{ "name": "note", "fields": { "body": { "kind": "string" } } }"#,
//! )?;
//! assert!(registry.get_schema("note").is_some());
//! # Ok(())
//! # }
//! ```

pub mod fingerprint;
pub mod registry;
pub mod types;


// Re-export the main types for convenience
pub use fingerprint::SchemaFingerprint;
pub use registry::SchemaRegistry;
pub use types::{
    ArrayCaster, ArrayOptions, FieldDefinition, FieldKind, FieldOptions, FieldSet, ModelSchema,
};
