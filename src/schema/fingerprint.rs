//! Content-derived schema identity.
//!
//! A fingerprint is computed from a schema's serialized field collection,
//! never from its name. Two schemas that declare the same fields in the same
//! order hash to the same fingerprint and therefore share one cached
//! descriptor, while any change to a field or option produces a new identity.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::InspectorResult;
use crate::schema::types::FieldSet;

/// Identity of a field collection, usable as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaFingerprint(String);

impl SchemaFingerprint {
    /// Compute the fingerprint of a field collection.
    ///
    /// The fields are serialized to canonical JSON (absent options are
    /// omitted, declaration order preserved) and the full SHA-256 digest is
    /// base64-encoded.
    pub fn of(fields: &FieldSet) -> InspectorResult<Self> {
        let canonical = serde_json::to_vec(fields)?;
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        let hash = hasher.finalize();
        Ok(Self(BASE64.encode(hash)))
    }

    /// The encoded digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
