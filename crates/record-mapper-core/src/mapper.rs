//! Structural mapper: projects one record onto another record type.
//!
//! The source is serialized to a value graph, then walked against the target's
//! [`RecordDescriptor`](crate::RecordDescriptor). Matching fields are copied into
//! the target's blank (`Default`) graph; nested records and lists of records are
//! projected recursively, everything else is copied as-is. The result is
//! deserialized back into the target type.

use serde::Serialize;
use serde_json::Value;

use crate::descriptor::{RecordRef, TypeTag};
use crate::error::MapperError;
use crate::introspect::Record;

/// Stateless record-to-record mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectMapper;

impl ObjectMapper {
    pub fn new() -> Self {
        ObjectMapper
    }

    /// Map `source` into a new `T`.
    ///
    /// Fields of `T` missing from the source keep their default; source fields
    /// unknown to `T` are ignored. Values are not coerced: a matching field must
    /// deserialize into the target field's Rust type, otherwise the call fails
    /// with [`MapperError::Json`].
    pub fn map<T: Record>(&self, source: &impl Serialize) -> Result<T, MapperError> {
        let graph = self.map_to_value_graph::<T>(source)?;
        Ok(serde_json::from_value(graph)?)
    }

    /// Map an already-built value graph (e.g. a decoded request body) into `T`.
    pub fn map_from_value_graph<T: Record>(&self, source: &Value) -> Result<T, MapperError> {
        let graph = project_record(source, &RecordRef::of::<T>())?;
        Ok(serde_json::from_value(graph)?)
    }

    /// Map `source` onto `T`'s shape and return the value graph instead of a `T`.
    pub fn map_to_value_graph<T: Record>(&self, source: &impl Serialize) -> Result<Value, MapperError> {
        let source = serde_json::to_value(source)?;
        project_record(&source, &RecordRef::of::<T>())
    }

    /// Like [`map_to_value_graph`](Self::map_to_value_graph), with every `null`
    /// field removed recursively. Used to build partial-update payloads.
    pub fn map_to_value_graph_dropping_empty_fields<T: Record>(
        &self,
        source: &impl Serialize,
    ) -> Result<Value, MapperError> {
        let mut graph = self.map_to_value_graph::<T>(source)?;
        drop_empty_fields(&mut graph);
        Ok(graph)
    }
}

fn project_record(source: &Value, target: &RecordRef) -> Result<Value, MapperError> {
    let Value::Object(source_fields) = source else {
        return Err(MapperError::introspection(
            target.type_name(),
            format!("mapping source must be a mapping, found {}", kind_of(source)),
        ));
    };

    let descriptor = target.descriptor()?;
    let mut projected = target.blank()?;
    let Value::Object(out) = &mut projected else {
        return Err(MapperError::introspection(
            target.type_name(),
            "default instance does not serialize to a mapping",
        ));
    };

    tracing::debug!(
        record = target.type_name(),
        source_fields = source_fields.len(),
        "mapping record"
    );

    for (name, value) in source_fields {
        let Some(field) = descriptor.field(name) else {
            tracing::trace!(record = target.type_name(), field = %name, "ignoring unknown source field");
            continue;
        };
        out.insert(name.clone(), project_field(value, &field.type_tag)?);
    }

    Ok(projected)
}

fn project_field(value: &Value, type_tag: &TypeTag) -> Result<Value, MapperError> {
    match (type_tag, value) {
        (TypeTag::Record(nested), Value::Object(_)) => project_record(value, nested),
        (TypeTag::ListOf(element), Value::Array(items)) => match element.as_record() {
            Some(nested) => items
                .iter()
                .map(|item| match item {
                    Value::Object(_) => project_record(item, nested),
                    other => Ok(other.clone()),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            None => Ok(value.clone()),
        },
        _ => Ok(value.clone()),
    }
}

/// Remove every `null`-valued key, recursing through mappings and sequences.
///
/// Sequence elements are never removed, only the mappings inside them are
/// compacted.
pub fn drop_empty_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for child in map.values_mut() {
                drop_empty_fields(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                drop_empty_fields(item);
            }
        }
        _ => {}
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
