//! # record-mapper-core
//!
//! Moves data between differently-shaped records without runtime reflection.
//!
//! - [`fields`]: memoized per-type field descriptors (inheritance by composition).
//! - [`ObjectMapper`]: field-by-field projection into another record type.
//! - [`CaseCodec`]: JSON codec rewriting keys snake_case ⇄ camelCase.
//! - [`AutoFixture`]: random or deterministic test fixtures.
//!
//! Records opt in by implementing [`Record`]; enumerations used as field types
//! implement [`RecordEnum`].

pub mod case;
pub mod codec;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fixture;
pub mod introspect;
pub mod mapper;

pub use case::{camel_to_snake, snake_to_camel};
pub use codec::CaseCodec;
pub use config::FixtureOptions;
pub use descriptor::{
    EnumRef, FieldDescriptor, RecordDescriptor, RecordDescriptorBuilder, RecordRef, ScalarKind,
    TypeTag,
};
pub use error::{ErrorCode, MapperError};
pub use fixture::AutoFixture;
pub use introspect::{cached_descriptor_count, fields, Record, RecordEnum};
pub use mapper::{drop_empty_fields, ObjectMapper};
