//! Core types for document-model schema definitions.
//!
//! These types describe the *input* side of descriptor derivation: a named
//! model schema whose fields carry a kind, an option bag, and, for container
//! fields, an element caster or a nested field collection. Field order is
//! preserved, so a schema serializes back in declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Ordered collection of named field definitions.
///
/// Insertion order is authoritative: derived descriptors list their
/// properties in the order the fields were declared.
pub type FieldSet = IndexMap<String, FieldDefinition>;

/// A named document-model schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Unique schema name, e.g. "article"
    pub name: String,
    /// Field definitions in declaration order
    #[serde(default)]
    pub fields: FieldSet,
}

impl ModelSchema {
    /// Create a new model schema from a field collection.
    pub fn new(name: impl Into<String>, fields: FieldSet) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Resolved kind of a field definition.
///
/// This is a closed set: anything a model can declare maps onto exactly one
/// of these before derivation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Plain text
    String,
    /// Integer or floating point
    Number,
    /// True/false
    Boolean,
    /// Timestamp
    Date,
    /// Opaque identifier pointing at another collection
    Reference,
    /// Homogeneous list, element kind supplied by the caster
    Array,
    /// Nested field collection, always exposed as an array of documents
    SubSchema,
}

impl FieldKind {
    /// Canonical name, as it appears in serialized schemas.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Reference => "reference",
            FieldKind::Array => "array",
            FieldKind::SubSchema => "subSchema",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::String
    }
}

/// One field of a model schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Resolved kind of the field
    pub kind: FieldKind,
    /// Element definition for `Array` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caster: Option<ArrayCaster>,
    /// Declared options
    #[serde(default)]
    pub options: FieldOptions,
    /// Nested field collection for `SubSchema` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_schema: Option<FieldSet>,
}

impl FieldDefinition {
    /// A plain scalar field of the given kind.
    pub fn scalar(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// A reference field pointing at the named collection.
    pub fn reference(collection: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Reference,
            options: FieldOptions {
                reference: Some(collection.into()),
                ..FieldOptions::default()
            },
            ..Self::default()
        }
    }

    /// An array field with elements of the given kind.
    pub fn array_of(element: FieldKind) -> Self {
        Self {
            kind: FieldKind::Array,
            caster: Some(ArrayCaster::new(element)),
            ..Self::default()
        }
    }

    /// A nested sub-schema field.
    pub fn nested(fields: FieldSet) -> Self {
        Self {
            kind: FieldKind::SubSchema,
            sub_schema: Some(fields),
            ..Self::default()
        }
    }

    /// Replace the field-level options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the element-level options of an array field.
    ///
    /// No effect on fields without a caster.
    pub fn with_element_options(mut self, options: FieldOptions) -> Self {
        if let Some(caster) = &mut self.caster {
            caster.options = options;
        }
        self
    }
}

/// Element definition carried by an array field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayCaster {
    /// Kind of each element
    pub kind: FieldKind,
    /// Element-level options
    #[serde(default)]
    pub options: FieldOptions,
}

impl ArrayCaster {
    /// Create a caster for elements of the given kind, with no options.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            options: FieldOptions::default(),
        }
    }
}

/// Declared options of a field definition.
///
/// Every member is optional; absent means "not declared". Unknown keys in
/// serialized schemas are ignored on load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldOptions {
    /// Presence requirement; `Some(true)` makes the field mandatory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Explicit optionality, consulted only when `required` is not `true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Opt out of markup sanitization for string content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_html: Option<bool>,
    /// Literal regular expression the value must match
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_source: Option<String>,
    /// Symbolic pattern name resolved by the validation engine, e.g. "email"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum length for strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length for strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Exact length for strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_length: Option<u64>,
    /// Inclusive lower bound for numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    /// Inclusive upper bound for numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    /// Strictly-less-than bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<Number>,
    /// Less-than-or-equal bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Number>,
    /// Strictly-greater-than bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<Number>,
    /// Greater-than-or-equal bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Number>,
    /// Not-equal constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ne: Option<Number>,
    /// Closed set of admissible values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Admissible values declared directly, shadowed by `enum` when both exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<Vec<Value>>,
    /// Default value recorded for downstream consumers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Target collection of a reference field
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Constraints applying to the array itself rather than its elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_options: Option<ArrayOptions>,
}

impl FieldOptions {
    /// Merge these (element-level) options under the field-level `outer`
    /// options. `outer` wins on every collision except optionality:
    /// `required` and `optional` always come from `self`, since elements
    /// never inherit the presence rules of the array that holds them.
    pub fn merged_under(&self, outer: &FieldOptions) -> FieldOptions {
        FieldOptions {
            required: self.required,
            optional: self.optional,
            allow_html: outer.allow_html.or(self.allow_html),
            match_source: outer
                .match_source
                .clone()
                .or_else(|| self.match_source.clone()),
            pattern: outer.pattern.clone().or_else(|| self.pattern.clone()),
            min_length: outer.min_length.or(self.min_length),
            max_length: outer.max_length.or(self.max_length),
            exact_length: outer.exact_length.or(self.exact_length),
            min: outer.min.clone().or_else(|| self.min.clone()),
            max: outer.max.clone().or_else(|| self.max.clone()),
            lt: outer.lt.clone().or_else(|| self.lt.clone()),
            lte: outer.lte.clone().or_else(|| self.lte.clone()),
            gt: outer.gt.clone().or_else(|| self.gt.clone()),
            gte: outer.gte.clone().or_else(|| self.gte.clone()),
            ne: outer.ne.clone().or_else(|| self.ne.clone()),
            enum_values: outer
                .enum_values
                .clone()
                .or_else(|| self.enum_values.clone()),
            eq: outer.eq.clone().or_else(|| self.eq.clone()),
            default: outer.default.clone().or_else(|| self.default.clone()),
            reference: outer.reference.clone().or_else(|| self.reference.clone()),
            array_options: outer
                .array_options
                .clone()
                .or_else(|| self.array_options.clone()),
        }
    }
}

/// Constraints that apply to an array node itself, not to its elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrayOptions {
    /// Minimum number of elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum number of elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Exact number of elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_length: Option<u64>,
    /// Closed set of admissible array values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<Vec<Value>>,
    /// Default value for the whole array
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}
