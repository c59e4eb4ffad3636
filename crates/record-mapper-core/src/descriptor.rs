//! Field descriptors, the explicit replacement for runtime type inspection.
//!
//! Every record type registers its fields once through [`RecordDescriptorBuilder`]
//! (see [`Record::describe`](crate::Record::describe)). The resulting
//! [`RecordDescriptor`] is an ordered list of `(name, TypeTag)` pairs that the
//! mapper and the fixture generator walk instead of reflecting over values.
//!
//! ## Inheritance
//!
//! Record inheritance is modelled as composition: `extends::<Base>()` embeds the
//! base descriptor's fields ahead of the derived fields. A derived field with the
//! same name replaces the base entry in place, so ordering stays
//! "ancestors first, declaration order within a level".

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::MapperError;
use crate::introspect::{self, Record, RecordEnum};

/// Scalar kinds a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Bool,
    Integer,
    Float,
    /// UTC timestamp, serialized as RFC 3339 (`chrono::DateTime<Utc>`).
    DateTime,
}

/// Declared semantic type of a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeTag {
    Scalar(ScalarKind),
    Enum(EnumRef),
    Record(RecordRef),
    ListOf(Box<TypeTag>),
}

impl TypeTag {
    pub const STRING: TypeTag = TypeTag::Scalar(ScalarKind::String);
    pub const BOOL: TypeTag = TypeTag::Scalar(ScalarKind::Bool);
    pub const INTEGER: TypeTag = TypeTag::Scalar(ScalarKind::Integer);
    pub const FLOAT: TypeTag = TypeTag::Scalar(ScalarKind::Float);
    pub const DATETIME: TypeTag = TypeTag::Scalar(ScalarKind::DateTime);

    /// Nested record field.
    pub fn record<T: Record>() -> Self {
        TypeTag::Record(RecordRef::of::<T>())
    }

    /// Enumeration field.
    pub fn enumeration<E: RecordEnum>() -> Self {
        TypeTag::Enum(EnumRef::of::<E>())
    }

    /// List field with the given element type.
    pub fn list_of(element: TypeTag) -> Self {
        TypeTag::ListOf(Box::new(element))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeTag::ListOf(_))
    }

    /// Returns the nested record type, if this is `Record(_)`.
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            TypeTag::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the element type, if this is `ListOf(_)`.
    pub fn element(&self) -> Option<&TypeTag> {
        match self {
            TypeTag::ListOf(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Handle to a record type: identity plus the two operations the walkers need.
#[derive(Clone, Copy)]
pub struct RecordRef {
    type_id: TypeId,
    type_name: &'static str,
    descriptor: fn() -> Result<Arc<RecordDescriptor>, MapperError>,
    blank: fn() -> Result<Value, MapperError>,
}

impl RecordRef {
    pub fn of<T: Record>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: short_type_name::<T>(),
            descriptor: introspect::fields::<T>,
            blank: introspect::blank_value::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Cached descriptor of the referenced type.
    pub fn descriptor(&self) -> Result<Arc<RecordDescriptor>, MapperError> {
        (self.descriptor)()
    }

    /// Serialized `Default` instance of the referenced type.
    pub fn blank(&self) -> Result<Value, MapperError> {
        (self.blank)()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordRef({})", self.type_name)
    }
}

/// Handle to an enumeration type.
#[derive(Clone, Copy)]
pub struct EnumRef {
    type_id: TypeId,
    type_name: &'static str,
    members: fn() -> Result<Vec<Value>, serde_json::Error>,
}

impl EnumRef {
    pub fn of<E: RecordEnum>() -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            type_name: short_type_name::<E>(),
            members: introspect::enum_members::<E>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Underlying values of every member, in declaration order.
    pub fn members(&self) -> Result<Vec<Value>, serde_json::Error> {
        (self.members)()
    }
}

impl PartialEq for EnumRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for EnumRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumRef({})", self.type_name)
    }
}

/// A single named field and its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_tag: TypeTag,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}

/// Ordered, effective field set of a record type (inherited fields included).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder handed to [`Record::describe`](crate::Record::describe).
#[derive(Debug)]
pub struct RecordDescriptorBuilder {
    type_name: &'static str,
    parent: Option<RecordRef>,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptorBuilder {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            parent: None,
            fields: Vec::new(),
        }
    }

    /// Inherit every field of `P`. Single inheritance: a second call replaces the first.
    pub fn extends<P: Record>(mut self) -> Self {
        self.parent = Some(RecordRef::of::<P>());
        self
    }

    /// Declare a field. Redeclaring a name at the same level replaces the earlier entry.
    pub fn field(mut self, name: impl Into<String>, type_tag: TypeTag) -> Self {
        let field = FieldDescriptor::new(name, type_tag);
        upsert(&mut self.fields, field);
        self
    }

    /// Resolve the ancestor chain and validate every field shape.
    pub fn build(self) -> Result<RecordDescriptor, MapperError> {
        let mut fields = match &self.parent {
            Some(parent) => {
                tracing::trace!(
                    record = self.type_name,
                    parent = parent.type_name(),
                    "embedding parent descriptor"
                );
                parent.descriptor()?.fields().to_vec()
            }
            None => Vec::new(),
        };

        for field in self.fields {
            validate_shape(self.type_name, &field)?;
            upsert(&mut fields, field);
        }

        Ok(RecordDescriptor {
            type_name: self.type_name,
            fields,
        })
    }
}

fn upsert(fields: &mut Vec<FieldDescriptor>, field: FieldDescriptor) {
    match fields.iter_mut().find(|f| f.name == field.name) {
        Some(slot) => *slot = field,
        None => fields.push(field),
    }
}

fn validate_shape(type_name: &str, field: &FieldDescriptor) -> Result<(), MapperError> {
    if field.name.is_empty() {
        return Err(MapperError::introspection(
            type_name,
            "field names must not be empty",
        ));
    }
    if let TypeTag::ListOf(inner) = &field.type_tag {
        if inner.is_list() {
            return Err(MapperError::introspection(
                type_name,
                format!("field `{}`: lists of lists are not supported", field.name),
            ));
        }
    }
    Ok(())
}

/// `std::any::type_name` without the module path (`a::b::Foo<c::Bar>` → `Foo<c::Bar>`).
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head_end = full.find('<').unwrap_or(full.len());
    match full[..head_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
