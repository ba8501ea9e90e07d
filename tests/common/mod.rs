//! Shared fixtures for descriptor derivation tests.
//!
//! The `article` schema exercises every derivation rule at once: scalars of
//! each kind, references, sanitize exemptions, symbolic and literal patterns,
//! scalar arrays with element and array-level options, dotted names, a nested
//! sub-schema, and an internal field that must never surface.

use schema_inspector::{
    ArrayOptions, FieldDefinition, FieldKind, FieldOptions, FieldSet, ModelSchema, SchemaRegistry,
};
use serde_json::json;

/// The article schema, built programmatically.
pub fn article_schema() -> ModelSchema {
    let mut fields = FieldSet::new();

    fields.insert(
        "slug".to_string(),
        FieldDefinition::scalar(FieldKind::String),
    );
    fields.insert(
        "title".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            required: Some(true),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "summary".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            allow_html: Some(true),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "email".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            pattern: Some("email".to_string()),
            ..FieldOptions::default()
        }),
    );
    fields.insert("author".to_string(), FieldDefinition::reference("user"));
    fields.insert(
        "status".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            enum_values: Some(vec![json!("draft"), json!("published")]),
            default: Some(json!("draft")),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "publishedAt".to_string(),
        FieldDefinition::scalar(FieldKind::Date),
    );
    fields.insert(
        "revision".to_string(),
        FieldDefinition::scalar(FieldKind::Number).with_options(FieldOptions {
            lte: Some(1000.into()),
            default: Some(json!(0)),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "tags".to_string(),
        FieldDefinition::array_of(FieldKind::String),
    );
    fields.insert(
        "keywords".to_string(),
        FieldDefinition::array_of(FieldKind::String).with_element_options(FieldOptions {
            allow_html: Some(true),
            match_source: Some("^[a-z]+$".to_string()),
            min_length: Some(2),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "aliases".to_string(),
        FieldDefinition::array_of(FieldKind::String).with_element_options(FieldOptions {
            allow_html: Some(true),
            array_options: Some(ArrayOptions {
                min_length: Some(2),
                max_length: Some(8),
                ..ArrayOptions::default()
            }),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "ratings".to_string(),
        FieldDefinition::array_of(FieldKind::Number).with_element_options(FieldOptions {
            gte: Some(1.into()),
            lte: Some(100.into()),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "scores".to_string(),
        FieldDefinition::array_of(FieldKind::Number),
    );
    fields.insert(
        "links.web".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            pattern: Some("url".to_string()),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "links.apple".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            pattern: Some("url".to_string()),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "editors".to_string(),
        FieldDefinition::array_of(FieldKind::Reference).with_element_options(FieldOptions {
            reference: Some("user".to_string()),
            ..FieldOptions::default()
        }),
    );

    let mut vote_fields = FieldSet::new();
    vote_fields.insert("user".to_string(), FieldDefinition::reference("user"));
    vote_fields.insert(
        "type".to_string(),
        FieldDefinition::scalar(FieldKind::String).with_options(FieldOptions {
            enum_values: Some(vec![json!("up"), json!("down")]),
            ..FieldOptions::default()
        }),
    );
    fields.insert(
        "votes".to_string(),
        FieldDefinition::nested(vote_fields).with_options(FieldOptions {
            array_options: Some(ArrayOptions {
                min_length: Some(2),
                ..ArrayOptions::default()
            }),
            ..FieldOptions::default()
        }),
    );

    fields.insert(
        "_internal".to_string(),
        FieldDefinition::scalar(FieldKind::String),
    );

    ModelSchema::new("article", fields)
}

/// The same article schema in its serialized form.
pub const ARTICLE_JSON: &str = r#"{
    "name": "article",
    "fields": {
        "slug": { "kind": "string" },
        "title": { "kind": "string", "options": { "required": true } },
        "summary": { "kind": "string", "options": { "allowHtml": true } },
        "email": { "kind": "string", "options": { "pattern": "email" } },
        "author": { "kind": "reference", "options": { "ref": "user" } },
        "status": {
            "kind": "string",
            "options": { "enum": ["draft", "published"], "default": "draft" }
        },
        "publishedAt": { "kind": "date" },
        "revision": { "kind": "number", "options": { "lte": 1000, "default": 0 } },
        "tags": { "kind": "array", "caster": { "kind": "string" } },
        "keywords": {
            "kind": "array",
            "caster": {
                "kind": "string",
                "options": { "allowHtml": true, "match": "^[a-z]+$", "minLength": 2 }
            }
        },
        "aliases": {
            "kind": "array",
            "caster": {
                "kind": "string",
                "options": {
                    "allowHtml": true,
                    "arrayOptions": { "minLength": 2, "maxLength": 8 }
                }
            }
        },
        "ratings": {
            "kind": "array",
            "caster": { "kind": "number", "options": { "gte": 1, "lte": 100 } }
        },
        "scores": { "kind": "array", "caster": { "kind": "number" } },
        "links.web": { "kind": "string", "options": { "pattern": "url" } },
        "links.apple": { "kind": "string", "options": { "pattern": "url" } },
        "editors": {
            "kind": "array",
            "caster": { "kind": "reference", "options": { "ref": "user" } }
        },
        "votes": {
            "kind": "subSchema",
            "options": { "arrayOptions": { "minLength": 2 } },
            "subSchema": {
                "user": { "kind": "reference", "options": { "ref": "user" } },
                "type": { "kind": "string", "options": { "enum": ["up", "down"] } }
            }
        },
        "_internal": { "kind": "string" }
    }
}"#;

/// A registry holding the article schema.
pub fn article_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.add_schema(article_schema());
    registry
}
