//! Memoizing façade over descriptor derivation.
//!
//! The inspector owns the only cache in the crate: a map from schema
//! fingerprint to derived descriptor tree. Consumers hold the tree behind an
//! [`Arc`], so a cache hit is a pointer clone and every requester of the same
//! schema content shares one allocation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::descriptor::{Descriptor, derive_descriptor};
use crate::error::{InspectorError, InspectorResult};
use crate::schema::{ModelSchema, SchemaFingerprint, SchemaRegistry};

/// Derives validation descriptors and caches them by schema content.
///
/// The cache key is the [`SchemaFingerprint`] of the field collection, not
/// the schema name: renaming a schema or registering the same field layout
/// under two names converges on one shared tree, while any change to a field
/// or option produces a fresh entry.
pub struct Inspector {
    descriptors: RwLock<HashMap<SchemaFingerprint, Arc<Descriptor>>>,
}

impl Inspector {
    /// Create an inspector with an empty descriptor cache.
    pub fn new() -> Self {
        Self {
            descriptors: RwLock::new(HashMap::new()),
        }
    }

    /// Registration hook: look a schema up by name and return its
    /// descriptor, deriving and caching it on first sight.
    ///
    /// Safe to call repeatedly for the same schema; later calls are cache
    /// hits.
    pub fn register(
        &self,
        registry: &SchemaRegistry,
        name: &str,
    ) -> InspectorResult<Arc<Descriptor>> {
        let schema = registry
            .get_schema(name)
            .ok_or_else(|| InspectorError::schema_not_found(name))?;
        self.descriptor_for(schema)
    }

    /// Return the descriptor for a schema, deriving it on first sight.
    ///
    /// Derivation runs outside the cache lock. Should two callers race on
    /// the same fingerprint, the first stored tree wins and both receive it.
    /// A failed derivation caches nothing.
    pub fn descriptor_for(&self, schema: &ModelSchema) -> InspectorResult<Arc<Descriptor>> {
        let fingerprint = SchemaFingerprint::of(&schema.fields)?;

        {
            let descriptors = self.descriptors.read().map_err(|_| poisoned())?;
            if let Some(existing) = descriptors.get(&fingerprint) {
                debug!("Descriptor cache hit for schema '{}'", schema.name);
                return Ok(Arc::clone(existing));
            }
        }

        let derived = Arc::new(derive_descriptor(schema)?);
        debug!(
            "Caching descriptor for schema '{}' under fingerprint {}",
            schema.name, fingerprint
        );

        let mut descriptors = self.descriptors.write().map_err(|_| poisoned())?;
        let stored = descriptors.entry(fingerprint).or_insert(derived);
        Ok(Arc::clone(stored))
    }

    /// Number of distinct schema shapes currently cached.
    pub fn cached_count(&self) -> usize {
        self.descriptors.read().map_or(0, |descriptors| descriptors.len())
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> InspectorError {
    InspectorError::internal("Descriptor cache lock poisoned")
}
