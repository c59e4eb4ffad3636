//! Synthetic fixture generation for tests.
//!
//! Walks a record's descriptor and fills every field that is still empty
//! (`null`, or `[]` for list fields) with random or fully deterministic data.
//! Fields that already hold a value, such as non-`None` defaults or fields set
//! on a partial fixture, are left alone. That includes a nested record that is
//! not wrapped in `Option`: its default is a mapping, so it is never generated
//! and its own fields are not visited.

mod generators;

use serde_json::Value;

use crate::config::{FixtureOptions, Mode};
use crate::descriptor::{EnumRef, RecordRef, ScalarKind, TypeTag};
use crate::error::MapperError;
use crate::introspect::Record;

use generators::{
    datetime_value, deterministic_datetime, deterministic_float, deterministic_string,
    random_token,
};

/// Fixture generator. Owns the RNG used in random mode.
#[derive(Debug, Clone)]
pub struct AutoFixture {
    rng: fastrand::Rng,
}

impl Default for AutoFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoFixture {
    /// Random mode seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Random mode with a reproducible RNG stream. Random timestamps still use
    /// the current time.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Build a `T` from its default and fill every empty field.
    pub fn create<T: Record>(&mut self, options: &FixtureOptions) -> Result<T, MapperError> {
        self.populate(T::default(), options)
    }

    /// Fill the empty fields of a partially built `T`.
    pub fn populate<T: Record>(
        &mut self,
        partial: T,
        options: &FixtureOptions,
    ) -> Result<T, MapperError> {
        let record = RecordRef::of::<T>();
        options.mode()?;

        let graph = serde_json::to_value(&partial)
            .map_err(|e| MapperError::fixture(record.type_name(), e.to_string()))?;
        let filled = self.fill_record(graph, &record, options)?;

        serde_json::from_value(filled).map_err(|e| {
            MapperError::fixture(
                record.type_name(),
                format!("generated data does not deserialize: {e}"),
            )
        })
    }

    /// `count` independently generated instances.
    pub fn create_many<T: Record>(
        &mut self,
        count: usize,
        options: &FixtureOptions,
    ) -> Result<Vec<T>, MapperError> {
        options.mode()?;
        (0..count).map(|_| self.create(options)).collect()
    }

    /// Same as [`create`](Self::create), returning the value graph.
    pub fn create_value_graph<T: Record>(
        &mut self,
        options: &FixtureOptions,
    ) -> Result<Value, MapperError> {
        let fixture: T = self.create(options)?;
        Ok(serde_json::to_value(fixture)?)
    }

    /// Same as [`create_many`](Self::create_many), returning value graphs.
    pub fn create_many_value_graphs<T: Record>(
        &mut self,
        count: usize,
        options: &FixtureOptions,
    ) -> Result<Vec<Value>, MapperError> {
        options.mode()?;
        (0..count)
            .map(|_| self.create_value_graph::<T>(options))
            .collect()
    }

    fn fill_record(
        &mut self,
        graph: Value,
        record: &RecordRef,
        options: &FixtureOptions,
    ) -> Result<Value, MapperError> {
        let descriptor = record
            .descriptor()
            .map_err(|e| into_fixture_error(record, e))?;
        let Value::Object(mut fields) = graph else {
            return Err(MapperError::fixture(
                record.type_name(),
                "instance does not serialize to a mapping",
            ));
        };
        let mode = options.mode()?;

        tracing::debug!(
            record = record.type_name(),
            depth = options.nesting_depth,
            deterministic = matches!(mode, Mode::Deterministic { .. }),
            "generating fixture"
        );

        for field in descriptor.fields() {
            let current = fields.get(&field.name).unwrap_or(&Value::Null);
            if !is_empty(current, &field.type_tag) {
                tracing::trace!(record = record.type_name(), field = %field.name, "keeping populated field");
                continue;
            }
            let generated = self
                .generate(record, &field.name, &field.type_tag, options, mode)
                .map_err(|e| into_fixture_error(record, e))?;
            fields.insert(field.name.clone(), generated);
        }

        Ok(Value::Object(fields))
    }

    fn generate(
        &mut self,
        record: &RecordRef,
        field: &str,
        type_tag: &TypeTag,
        options: &FixtureOptions,
        mode: Mode<'_>,
    ) -> Result<Value, MapperError> {
        match type_tag {
            TypeTag::Scalar(kind) => self.scalar(record, field, *kind, mode),
            TypeTag::Enum(members) => self.enum_member(members, mode),
            TypeTag::Record(nested) => self.nested(nested, options),
            TypeTag::ListOf(element) => self.list(record, field, element, options, mode),
        }
    }

    fn scalar(
        &mut self,
        record: &RecordRef,
        field: &str,
        kind: ScalarKind,
        mode: Mode<'_>,
    ) -> Result<Value, MapperError> {
        let value = match (kind, mode) {
            (ScalarKind::String, Mode::Deterministic { seed, .. }) => {
                Value::String(deterministic_string(field, seed, None))
            }
            (ScalarKind::String, Mode::Random) => {
                Value::String(format!("{field}{}", random_token(&mut self.rng)))
            }
            (ScalarKind::Bool, Mode::Deterministic { index, .. }) => Value::Bool(index != 0),
            (ScalarKind::Bool, Mode::Random) => Value::Bool(self.rng.bool()),
            (ScalarKind::Integer, Mode::Deterministic { index, .. }) => Value::from(index),
            (ScalarKind::Integer, Mode::Random) => Value::from(self.rng.i64(0..=100)),
            (ScalarKind::Float, Mode::Deterministic { index, .. }) => {
                let float = deterministic_float(index).ok_or_else(|| {
                    MapperError::fixture(
                        record.type_name(),
                        format!("field `{field}`: index {index} does not form a float"),
                    )
                })?;
                Value::from(float)
            }
            (ScalarKind::Float, Mode::Random) => Value::from(self.rng.f64() * 100.0),
            (ScalarKind::DateTime, Mode::Deterministic { index, .. }) => {
                let datetime = deterministic_datetime(index).ok_or_else(|| {
                    MapperError::fixture(
                        record.type_name(),
                        format!("field `{field}`: index {index} is not a valid calendar date-time"),
                    )
                })?;
                datetime_value(datetime)?
            }
            (ScalarKind::DateTime, Mode::Random) => datetime_value(chrono::Utc::now())?,
        };
        Ok(value)
    }

    fn enum_member(&mut self, members: &EnumRef, mode: Mode<'_>) -> Result<Value, MapperError> {
        let mut values = members.members()?;
        if values.is_empty() {
            return Err(MapperError::fixture(members.type_name(), "enum has no members"));
        }
        let position = match mode {
            Mode::Deterministic { index, .. } => index % values.len(),
            Mode::Random => self.rng.usize(..values.len()),
        };
        Ok(values.swap_remove(position))
    }

    fn nested(&mut self, nested: &RecordRef, options: &FixtureOptions) -> Result<Value, MapperError> {
        let blank = nested.blank().map_err(|e| into_fixture_error(nested, e))?;
        self.fill_record(blank, nested, &options.nested())
    }

    fn list(
        &mut self,
        record: &RecordRef,
        field: &str,
        element: &TypeTag,
        options: &FixtureOptions,
        mode: Mode<'_>,
    ) -> Result<Value, MapperError> {
        let count = match mode {
            Mode::Deterministic { index, .. } => index,
            Mode::Random => self.rng.usize(..=options.list_limit),
        };

        let mut items = Vec::with_capacity(count);
        for position in 0..count {
            let item = match (element, mode) {
                (TypeTag::Scalar(ScalarKind::String), Mode::Deterministic { seed, .. }) => {
                    Value::String(deterministic_string(field, seed, Some(position)))
                }
                (TypeTag::Scalar(ScalarKind::Integer), Mode::Deterministic { index, .. }) => {
                    Value::from(index + position)
                }
                (TypeTag::ListOf(_), _) => {
                    return Err(MapperError::fixture(
                        record.type_name(),
                        format!("field `{field}`: lists of lists are not supported"),
                    ));
                }
                (other, _) => self.generate(record, field, other, options, mode)?,
            };
            items.push(item);
        }
        Ok(Value::Array(items))
    }
}

fn is_empty(value: &Value, type_tag: &TypeTag) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => type_tag.is_list() && items.is_empty(),
        _ => false,
    }
}

/// Descriptor failures surface as fixture failures on this path.
fn into_fixture_error(record: &RecordRef, err: MapperError) -> MapperError {
    match err {
        MapperError::TypeIntrospection { type_name, message } => {
            MapperError::FixtureConstruction { type_name, message }
        }
        MapperError::Json(e) => MapperError::fixture(record.type_name(), e.to_string()),
        other => other,
    }
}
