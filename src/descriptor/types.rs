//! Descriptor tree produced by derivation.
//!
//! A descriptor is one node of the declarative validation-rule tree handed to
//! a generic validation engine. Nodes are plain data: they never execute
//! anything, they only state which assertions apply at their position.
//! Serialization omits every absent constraint so a node carries exactly the
//! keys a consumer must act on.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

/// Structural shape of a descriptor node.
///
/// Closed set; opaque reference fields are already rewritten to `String`
/// before a shape is assigned, and nested sub-schemas always surface as
/// `Array` of `Object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Document with named properties
    Object,
    /// Homogeneous list with an element descriptor
    Array,
    /// Plain text
    String,
    /// Integer or floating point
    Number,
    /// True/false
    Boolean,
    /// Timestamp
    Date,
}

impl Shape {
    /// Canonical name, as serialized under the `type` key.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Object => "object",
            Shape::Array => "array",
            Shape::String => "string",
            Shape::Number => "number",
            Shape::Boolean => "boolean",
            Shape::Date => "date",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One node of a derived validation-rule tree.
///
/// Marker booleans serialize only when set and optional constraints only
/// when present, so the JSON form of a node lists exactly the assertions
/// the validation engine has to check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Structural shape of the value at this position
    #[serde(rename = "type")]
    pub shape: Shape,
    /// Whether the value may be absent
    pub optional: bool,
    /// Assert the value is non-empty; set whenever the node is mandatory
    #[serde(skip_serializing_if = "is_false")]
    pub not_empty: bool,
    /// For objects: reject properties not listed in `properties`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// Regular expression source or symbolic pattern name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum length (string content or array element count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length (string content or array element count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Exact length (string content or array element count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_length: Option<u64>,
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    /// Inclusive upper bound
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<Vec<Value>>,
    /// Default value, recorded for downstream consumers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub def: Option<Value>,
    /// Value is an opaque identifier of another document
    #[serde(skip_serializing_if = "is_false")]
    pub opaque_ref: bool,
    /// Collection the opaque identifier points at
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_collection: Option<String>,
    /// Run markup sanitization over string content
    #[serde(skip_serializing_if = "is_false")]
    pub sanitize: bool,
    /// Child descriptors of an object node, in declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Descriptor>>,
    /// Element descriptor of an array node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Descriptor>>,
}

impl Descriptor {
    fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            optional: true,
            not_empty: false,
            strict: None,
            pattern: None,
            min_length: None,
            max_length: None,
            exact_length: None,
            min: None,
            max: None,
            lt: None,
            lte: None,
            gt: None,
            gte: None,
            ne: None,
            eq: None,
            def: None,
            opaque_ref: false,
            ref_collection: None,
            sanitize: false,
            properties: None,
            items: None,
        }
    }

    /// An object node with an empty property collection.
    pub fn object(strict: bool) -> Self {
        Self {
            strict: Some(strict),
            properties: Some(IndexMap::new()),
            ..Self::with_shape(Shape::Object)
        }
    }

    /// An array node around the given element descriptor.
    pub fn array(items: Descriptor) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::with_shape(Shape::Array)
        }
    }

    /// A bare scalar node of the given shape.
    pub fn scalar(shape: Shape) -> Self {
        Self::with_shape(shape)
    }

    /// Look up a named property of an object node.
    pub fn property(&self, name: &str) -> Option<&Descriptor> {
        self.properties.as_ref()?.get(name)
    }
}
