//! Registry for loading, managing, and accessing model schemas.
//!
//! The registry is a plain name-keyed store. It performs no derivation of its
//! own; the [`Inspector`](crate::Inspector) looks schemas up here and owns the
//! descriptor cache.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::types::ModelSchema;
use crate::error::InspectorResult;

/// Name-keyed store of model schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ModelSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema to the registry, replacing any previous schema of the
    /// same name.
    pub fn add_schema(&mut self, schema: ModelSchema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Load a schema from a JSON string and add it to the registry.
    pub fn add_schema_from_str(&mut self, content: &str) -> InspectorResult<()> {
        let schema = Self::schema_from_str(content)?;
        self.add_schema(schema);
        Ok(())
    }

    /// Load a schema from a JSON file and add it to the registry.
    pub fn add_schema_from_file<P: AsRef<Path>>(&mut self, path: P) -> InspectorResult<()> {
        let schema = Self::schema_from_file(path)?;
        self.add_schema(schema);
        Ok(())
    }

    /// Parse a schema from a JSON string.
    pub fn schema_from_str(content: &str) -> InspectorResult<ModelSchema> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a schema from a JSON file.
    pub fn schema_from_file<P: AsRef<Path>>(path: P) -> InspectorResult<ModelSchema> {
        let content = fs::read_to_string(path)?;
        Self::schema_from_str(&content)
    }

    /// Get a specific schema by name.
    pub fn get_schema(&self, name: &str) -> Option<&ModelSchema> {
        self.schemas.get(name)
    }

    /// Get all registered schemas.
    pub fn get_schemas(&self) -> Vec<&ModelSchema> {
        self.schemas.values().collect()
    }
}
