//! Validation-rule derivation for document-model schemas.
//!
//! Walks a schema's field definitions and derives a normalized, declarative
//! descriptor tree stating which assertions apply at each position. The tree
//! is plain data for a generic validation engine to execute; this crate never
//! validates documents itself.
//!
//! # Core Components
//!
//! - [`Inspector`] - Memoizing derivation façade and registration hook
//! - [`SchemaRegistry`] - Named model schemas, with JSON loading
//! - [`Descriptor`] - One node of the derived validation-rule tree
//!
//! # Quick Start
//!
//! ```rust
//! use schema_inspector::{
//!     FieldDefinition, FieldKind, FieldOptions, FieldSet, Inspector, ModelSchema,
//!     SchemaRegistry,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut fields = FieldSet::new();
//! fields.insert(
//!     "title".to_string(),
//!     FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
//!         required: Some(true),
//!         ..FieldOptions::default()
//!     }),
//! );
//!
//! let mut registry = SchemaRegistry::new();
//! registry.add_schema(ModelSchema::new("article", fields));
//!
//! let inspector = Inspector::new();
//! let descriptor = inspector.register(&registry, "article")?;
//!
//! let title = descriptor.property("title").expect("derived property");
//! assert!(!title.optional);
//! assert!(title.sanitize);
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod error;
pub mod inspector;
pub mod schema;

// Re-export commonly used types for convenience
pub use descriptor::{Descriptor, Shape, derive_descriptor};
pub use error::{DeriveError, DeriveResult, InspectorError, InspectorResult};
pub use inspector::Inspector;
pub use schema::{
    ArrayCaster, ArrayOptions, FieldDefinition, FieldKind, FieldOptions, FieldSet, ModelSchema,
    SchemaFingerprint, SchemaRegistry,
};
