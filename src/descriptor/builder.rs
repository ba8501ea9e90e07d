//! Derivation of validation descriptors from model schemas.
//!
//! This is a pure transformation: the schema is read, never mutated, and the
//! same schema always derives the same tree. Derivation walks the field
//! collection in declaration order and emits one descriptor node per field,
//! recursing through nested sub-schemas. Configuration mistakes abort the
//! whole derivation with a [`DeriveError`] carrying the dotted field path.

use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;

use super::types::{Descriptor, Shape};
use crate::error::{DeriveError, DeriveResult};
use crate::schema::{ArrayOptions, FieldDefinition, FieldKind, FieldOptions, FieldSet, ModelSchema};

/// Fields whose name starts with this prefix are internal bookkeeping and
/// never surface in a descriptor.
const RESERVED_PREFIX: char = '_';

/// Derive the validation descriptor tree for a model schema.
///
/// The root is always a mandatory, strict object node whose properties mirror
/// the schema's fields in declaration order.
pub fn derive_descriptor(schema: &ModelSchema) -> DeriveResult<Descriptor> {
    debug!("Deriving validation descriptor for schema '{}'", schema.name);

    let mut root = Descriptor::object(true);
    root.optional = false;
    root.not_empty = true;
    root.properties = Some(derive_fields(&schema.fields, "")?);

    debug!(
        "Derived descriptor for schema '{}' with {} top-level properties",
        schema.name,
        root.properties.as_ref().map_or(0, IndexMap::len)
    );
    Ok(root)
}

/// Derive the property collection for one level of fields.
///
/// A field named with a single embedded dot (`links.web`) produces two
/// entries: the flat entry under its literal name, and a structurally
/// identical copy nested as `web` inside a synthetic optional object node
/// `links`. A real field that clashes with such a synthetic container, in
/// either declaration order, is a fatal collision.
fn derive_fields(fields: &FieldSet, parent: &str) -> DeriveResult<IndexMap<String, Descriptor>> {
    let mut properties = IndexMap::new();

    for (name, field) in fields {
        if name.starts_with(RESERVED_PREFIX) {
            continue;
        }

        let path = child_path(parent, name);
        let node = derive_field(field, &path)?;

        if let Some((prefix, suffix)) = nested_alias(name) {
            let projected = node.clone();
            insert_flat(&mut properties, name, node, &path)?;
            project_nested(&mut properties, prefix, suffix, projected, &path)?;
        } else {
            insert_flat(&mut properties, name, node, &path)?;
        }
    }

    Ok(properties)
}

/// Derive the descriptor for a single field definition.
fn derive_field(field: &FieldDefinition, path: &str) -> DeriveResult<Descriptor> {
    // A nested field collection wins over the declared kind: sub-documents
    // are always exposed as an array of strict object nodes.
    if let Some(sub_fields) = &field.sub_schema {
        let mut items = Descriptor::object(true);
        items.properties = Some(derive_fields(sub_fields, path)?);

        let mut node = Descriptor::array(items);
        apply_optionality(&field.options, &mut node);
        apply_array_options(field.options.array_options.as_ref(), &mut node);
        return Ok(node);
    }

    if field.kind == FieldKind::Array {
        let caster = field
            .caster
            .as_ref()
            .ok_or_else(|| DeriveError::missing_element_kind(path))?;

        // Element options merged under field options; optionality stays
        // with the element, everything else the field may override.
        let merged = caster.options.merged_under(&field.options);
        let items = derive_scalar(caster.kind, &merged, path)?;

        let mut node = Descriptor::array(items);
        apply_optionality(&field.options, &mut node);
        apply_array_options(merged.array_options.as_ref(), &mut node);
        return Ok(node);
    }

    derive_scalar(field.kind, &field.options, path)
}

/// Derive a scalar node for a non-container kind.
///
/// References surface as string-shaped nodes marked `opaque_ref`, and keep
/// their target collection. Markers and validators key off the declared
/// kind, so a reference never collects string validators even though its
/// shape says string.
fn derive_scalar(kind: FieldKind, options: &FieldOptions, path: &str) -> DeriveResult<Descriptor> {
    let shape = match kind {
        FieldKind::String | FieldKind::Reference => Shape::String,
        FieldKind::Number => Shape::Number,
        FieldKind::Boolean => Shape::Boolean,
        FieldKind::Date => Shape::Date,
        FieldKind::Array => return Err(DeriveError::invalid_element_kind(path, kind)),
        FieldKind::SubSchema => return Err(DeriveError::missing_sub_schema(path)),
    };

    let mut node = Descriptor::scalar(shape);
    apply_optionality(options, &mut node);

    if kind == FieldKind::Reference {
        node.opaque_ref = true;
        node.ref_collection = options.reference.clone();
    }

    // Strings are sanitized unless markup is explicitly allowed or the
    // value space is already closed by an enumeration.
    if kind == FieldKind::String && options.allow_html != Some(true) && options.enum_values.is_none()
    {
        node.sanitize = true;
    }

    apply_pattern(kind, options, &mut node, path);
    apply_validators(kind, options, &mut node);
    Ok(node)
}

/// Resolve the optionality of a node.
///
/// `required: true` always wins; otherwise an explicit `optional` flag is
/// honored, and an undeclared field defaults to optional. Mandatory nodes
/// additionally assert non-emptiness.
fn apply_optionality(options: &FieldOptions, node: &mut Descriptor) {
    node.optional = if options.required == Some(true) {
        false
    } else {
        options.optional.unwrap_or(true)
    };

    if !node.optional {
        node.not_empty = true;
    }
}

/// Copy the pattern constraint, if any.
///
/// A literal `match` expression applies to any kind but must compile; one
/// that does not is dropped with a warning and the node gets no pattern at
/// all. A symbolic `pattern` name is only meaningful for string kinds and is
/// passed through uncompiled for the validation engine to resolve.
fn apply_pattern(kind: FieldKind, options: &FieldOptions, node: &mut Descriptor, path: &str) {
    if let Some(source) = &options.match_source {
        match Regex::new(source) {
            Ok(_) => node.pattern = Some(source.clone()),
            Err(error) => warn!(
                "Dropping unparseable match pattern {:?} on field '{}': {}",
                source, path, error
            ),
        }
    } else if kind == FieldKind::String {
        node.pattern = options.pattern.clone();
    }
}

/// Copy the value validators that apply to the declared kind.
fn apply_validators(kind: FieldKind, options: &FieldOptions, node: &mut Descriptor) {
    if kind == FieldKind::String {
        node.min_length = options.min_length;
        node.max_length = options.max_length;
        node.exact_length = options.exact_length;
    }

    if kind == FieldKind::Number {
        node.min = options.min.clone();
        node.max = options.max.clone();
        node.lt = options.lt.clone();
        node.lte = options.lte.clone();
        node.gt = options.gt.clone();
        node.gte = options.gte.clone();
        node.ne = options.ne.clone();
    }

    if matches!(
        kind,
        FieldKind::String | FieldKind::Number | FieldKind::Boolean
    ) {
        if let Some(values) = &options.enum_values {
            node.eq = Some(values.clone());
        } else if let Some(values) = &options.eq {
            node.eq = Some(values.clone());
        }
    }

    // Defaults are recorded by presence, whatever the kind; falsy values
    // like 0, false and "" survive.
    if let Some(default) = &options.default {
        node.def = Some(default.clone());
    }
}

/// Copy array-level constraints onto an array node.
fn apply_array_options(array_options: Option<&ArrayOptions>, node: &mut Descriptor) {
    let Some(options) = array_options else {
        return;
    };

    node.min_length = options.min_length;
    node.max_length = options.max_length;
    node.exact_length = options.exact_length;
    if let Some(values) = &options.eq {
        node.eq = Some(values.clone());
    }
    if let Some(default) = &options.default {
        node.def = Some(default.clone());
    }
}

/// Split a field name carrying exactly one embedded dot into its synthetic
/// container name and nested property name. Names with no dot, several dots,
/// or an empty half stay flat.
fn nested_alias(name: &str) -> Option<(&str, &str)> {
    let (prefix, suffix) = name.split_once('.')?;
    if prefix.is_empty() || suffix.is_empty() || suffix.contains('.') {
        return None;
    }
    Some((prefix, suffix))
}

fn insert_flat(
    properties: &mut IndexMap<String, Descriptor>,
    name: &str,
    node: Descriptor,
    path: &str,
) -> DeriveResult<()> {
    if properties.insert(name.to_string(), node).is_some() {
        return Err(DeriveError::nested_name_collision(path, name));
    }
    Ok(())
}

/// Nest a copy of a dotted field's node inside its synthetic container,
/// creating the container on first use.
fn project_nested(
    properties: &mut IndexMap<String, Descriptor>,
    prefix: &str,
    suffix: &str,
    node: Descriptor,
    path: &str,
) -> DeriveResult<()> {
    let container = properties
        .entry(prefix.to_string())
        .or_insert_with(|| Descriptor::object(true));

    match container.properties.as_mut() {
        Some(children) => {
            children.insert(suffix.to_string(), node);
            Ok(())
        }
        None => Err(DeriveError::nested_name_collision(path, prefix)),
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}
