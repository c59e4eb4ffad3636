//! Type introspection: per-type field descriptors, computed once and cached.
//!
//! Descriptors live in a process-wide `DashMap` keyed by `TypeId`. Lookups never
//! hold a shard guard while a descriptor is being computed (computing a record
//! resolves its parent and nested types through the same cache). Two threads
//! racing on the same type may both compute it; the first insert wins and both
//! results are identical because descriptors are pure functions of the type.

use std::any::TypeId;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::descriptor::{short_type_name, RecordDescriptor, RecordDescriptorBuilder};
use crate::error::MapperError;

/// A record type the mapper and fixture generator can walk.
///
/// The `Default` instance is the blank every mapping starts from, and it must
/// serialize to a JSON object containing every declared field.
///
/// Nested record fields should be `Option<_>`. A bare nested record serializes
/// its default as a mapping, which [`AutoFixture`](crate::AutoFixture) treats
/// as already populated and leaves at its default.
///
/// ```
/// use record_mapper_core::{Record, RecordDescriptorBuilder, TypeTag};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Participant {
///     id: Option<String>,
///     name: Option<String>,
/// }
///
/// impl Record for Participant {
///     fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
///         fields.field("id", TypeTag::STRING).field("name", TypeTag::STRING)
///     }
/// }
///
/// let descriptor = record_mapper_core::fields::<Participant>().unwrap();
/// assert_eq!(descriptor.names().collect::<Vec<_>>(), vec!["id", "name"]);
/// ```
pub trait Record: Default + Serialize + DeserializeOwned + 'static {
    /// Register this type's declared fields (and its parent, if any).
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder;
}

/// An enumeration usable as a record field.
///
/// The serde representation of each member is its underlying value.
pub trait RecordEnum: Serialize + Sized + 'static {
    /// All members in declaration order.
    fn members() -> &'static [Self];
}

fn cache() -> &'static DashMap<TypeId, Arc<RecordDescriptor>> {
    static DESCRIPTORS: OnceLock<DashMap<TypeId, Arc<RecordDescriptor>>> = OnceLock::new();
    DESCRIPTORS.get_or_init(DashMap::new)
}

/// Effective field descriptor of `T`, including inherited fields.
pub fn fields<T: Record>() -> Result<Arc<RecordDescriptor>, MapperError> {
    let key = TypeId::of::<T>();
    if let Some(hit) = cache().get(&key) {
        return Ok(Arc::clone(hit.value()));
    }

    let computed = Arc::new(compute::<T>()?);
    let entry = cache().entry(key).or_insert(computed);
    Ok(Arc::clone(entry.value()))
}

/// Number of descriptors currently cached.
pub fn cached_descriptor_count() -> usize {
    cache().len()
}

fn compute<T: Record>() -> Result<RecordDescriptor, MapperError> {
    let type_name = short_type_name::<T>();
    tracing::debug!(record = type_name, "computing record descriptor");

    let descriptor = T::describe(RecordDescriptorBuilder::new(type_name)).build()?;

    let blank = blank_value::<T>()?;
    let Value::Object(blank) = blank else {
        return Err(MapperError::introspection(
            type_name,
            "default instance does not serialize to a mapping",
        ));
    };
    for name in descriptor.names() {
        if !blank.contains_key(name) {
            return Err(MapperError::introspection(
                type_name,
                format!("declared field `{name}` is missing from the serialized default"),
            ));
        }
    }

    Ok(descriptor)
}

/// The serialized `Default` instance of `T`.
pub(crate) fn blank_value<T: Record>() -> Result<Value, MapperError> {
    serde_json::to_value(T::default()).map_err(|e| {
        MapperError::introspection(
            short_type_name::<T>(),
            format!("default instance cannot be serialized: {e}"),
        )
    })
}

pub(crate) fn enum_members<E: RecordEnum>() -> Result<Vec<Value>, serde_json::Error> {
    E::members().iter().map(serde_json::to_value).collect()
}
