//! Derived validation descriptors: the output tree and its builder.
//!
//! # Key Types
//!
//! - [`Descriptor`] - one node of the derived validation-rule tree
//! - [`Shape`] - structural shape of a node
//! - [`derive_descriptor`] - pure derivation from a [`ModelSchema`](crate::schema::ModelSchema)

pub mod builder;
pub mod types;


// Re-export the main types for convenience
pub use builder::derive_descriptor;
pub use types::{Descriptor, Shape};
