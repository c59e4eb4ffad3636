//! Integration tests for the synthetic fixture generator.

mod common;

use chrono::{TimeZone, Utc};
use common::{InheritedDto, NestedTestDto, TestDto, TestEnum};
use pretty_assertions::assert_eq;
use record_mapper_core::{
    AutoFixture, ErrorCode, FixtureOptions, MapperError, Record, RecordDescriptorBuilder, TypeTag,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Declares a field its default does not serialize.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Misdeclared {
    name: Option<String>,
}

impl Record for Misdeclared {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields.field("label", TypeTag::STRING)
    }
}

/// Serializes to a number, not a mapping.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Counter(u32);

impl Record for Counter {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HoldsMisdeclared {
    title: Option<String>,
    inner: Option<Misdeclared>,
}

impl Record for HoldsMisdeclared {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
            .field("title", TypeTag::STRING)
            .field("inner", TypeTag::record::<Misdeclared>())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HoldsCounters {
    counters: Vec<Counter>,
}

impl Record for HoldsCounters {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields.field("counters", TypeTag::list_of(TypeTag::record::<Counter>()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct BareNesting {
    label: Option<String>,
    inner: NestedTestDto,
}

impl Record for BareNesting {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
            .field("label", TypeTag::STRING)
            .field("inner", TypeTag::record::<NestedTestDto>())
    }
}

fn expected_nested() -> NestedTestDto {
    NestedTestDto {
        id: Some("id1234".to_string()),
        name: Some("name1234".to_string()),
    }
}

// ── Deterministic mode ──────────────────────────────────────────────────────

#[test]
fn test_create_predictable_data() {
    let dto: TestDto = AutoFixture::new()
        .create(&FixtureOptions::deterministic("1234", 2))
        .unwrap();

    let date = Utc.with_ymd_and_hms(2, 2, 2, 2, 2, 2).unwrap();
    let expected = TestDto {
        base: InheritedDto {
            id: Some("default_id".to_string()),
            name: Some("name1234".to_string()),
        },
        bool_: Some(true),
        enum_value: Some(TestEnum::Value1),
        list_of_enums: vec![TestEnum::Value1, TestEnum::Value1],
        list_of_strings: vec![
            "list_of_strings12340".to_string(),
            "list_of_strings12341".to_string(),
        ],
        list_of_ints: vec![2, 3],
        list_of_floats: vec![2.22, 2.22],
        list_of_bools: vec![true, true],
        date: Some(date),
        list_of_dates: vec![date, date],
        decimal_num: Some(2.22),
        nested: Some(expected_nested()),
        nested_list: vec![expected_nested(), expected_nested()],
    };

    assert_eq!(dto, expected);
}

#[test]
fn test_predictable_data_is_repeatable() {
    let options = FixtureOptions::deterministic("abc", 3);
    let a: TestDto = AutoFixture::new().create(&options).unwrap();
    let b: TestDto = AutoFixture::new().create(&options).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.enum_value, Some(TestEnum::Value2));
    assert_eq!(a.list_of_ints, vec![3, 4, 5]);
    assert_eq!(a.decimal_num, Some(3.333));
}

#[test]
fn test_index_outside_calendar_fails_construction() {
    let err = AutoFixture::new()
        .create::<TestDto>(&FixtureOptions::deterministic("1234", 13))
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::FixtureConstructionError);
    assert_eq!(err.type_name(), Some("TestDto"));
}

#[test]
fn test_unbuildable_descriptor_fails_construction() {
    let err = AutoFixture::new()
        .create::<Misdeclared>(&FixtureOptions::deterministic("1234", 2))
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::FixtureConstructionError);
    assert_eq!(err.type_name(), Some("Misdeclared"));
    assert!(err.to_string().contains("label"));

    let err = AutoFixture::new()
        .create::<Counter>(&FixtureOptions::random())
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::FixtureConstructionError);
    assert_eq!(err.type_name(), Some("Counter"));
}

#[test]
fn test_unbuildable_nested_descriptor_names_inner_type() {
    let err = AutoFixture::new()
        .create::<HoldsMisdeclared>(&FixtureOptions::deterministic("1234", 2))
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::FixtureConstructionError);
    assert_eq!(err.type_name(), Some("Misdeclared"));

    let err = AutoFixture::new()
        .create::<HoldsCounters>(&FixtureOptions::deterministic("1234", 2))
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::FixtureConstructionError);
    assert_eq!(err.type_name(), Some("Counter"));
}

#[test]
fn test_bare_nested_record_is_left_at_default() {
    let dto: BareNesting = AutoFixture::new()
        .create(&FixtureOptions::deterministic("1234", 2))
        .unwrap();
    assert_eq!(dto.label.as_deref(), Some("label1234"));
    assert_eq!(dto.inner, NestedTestDto::default());
}

#[test]
fn test_value_graph_output() {
    let graph = AutoFixture::new()
        .create_value_graph::<TestDto>(&FixtureOptions::deterministic("1234", 1))
        .unwrap();
    assert_eq!(graph["name"], json!("name1234"));
    assert_eq!(graph["date"], json!("0001-01-01T01:01:01Z"));
    assert_eq!(graph["list_of_ints"], json!([1]));
    assert_eq!(graph["nested_list"], json!([{"id": "id1234", "name": "name1234"}]));
}

// ── Random mode ─────────────────────────────────────────────────────────────

#[test]
fn test_create_random_data() {
    let options = FixtureOptions::random().with_list_limit(4);
    let dto: TestDto = AutoFixture::new().create(&options).unwrap();

    assert_eq!(dto.base.id.as_deref(), Some("default_id"));
    assert!(dto.base.name.unwrap().starts_with("name"));
    assert!(dto.bool_.is_some());
    assert!(dto.enum_value.is_some());
    assert!(dto.date.is_some());
    assert!(dto.decimal_num.is_some());
    assert!(dto.list_of_strings.len() <= 4);
    assert!(dto.nested_list.len() <= 4);

    let nested = dto.nested.unwrap();
    assert!(nested.id.unwrap().starts_with("id"));
}

#[test]
fn test_create_many() {
    let mut fixture = AutoFixture::with_seed(11);
    let dtos: Vec<TestDto> = fixture
        .create_many(5, &FixtureOptions::random().with_list_limit(2))
        .unwrap();
    assert_eq!(dtos.len(), 5);
    assert!(dtos.iter().all(|d| d.base.name.is_some()));

    let graphs = fixture
        .create_many_value_graphs::<TestDto>(3, &FixtureOptions::deterministic("s", 1))
        .unwrap();
    assert_eq!(graphs.len(), 3);
    assert!(graphs.iter().all(|g| g == &graphs[0]));
}

#[test]
fn test_create_many_zero_is_empty() {
    let dtos: Vec<TestDto> = AutoFixture::new()
        .create_many(0, &FixtureOptions::random())
        .unwrap();
    assert!(dtos.is_empty());
}

// ── Argument validation ─────────────────────────────────────────────────────

#[test]
fn test_seed_without_index_is_rejected() {
    let options = FixtureOptions {
        seed: Some("1234".to_string()),
        ..FixtureOptions::default()
    };
    let err = AutoFixture::new().create::<TestDto>(&options).unwrap_err();
    assert!(matches!(err, MapperError::InvalidFixtureArguments(_)));
}

#[test]
fn test_index_without_seed_is_rejected_even_for_zero_count() {
    let options = FixtureOptions {
        index: Some(2),
        ..FixtureOptions::default()
    };
    let err = AutoFixture::new()
        .create_many::<TestDto>(0, &options)
        .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::InvalidFixtureArgumentsError);
}

// ── Partial fixtures ────────────────────────────────────────────────────────

#[test]
fn test_populate_fills_only_empty_fields() {
    let partial = TestDto {
        list_of_ints: vec![99],
        nested: Some(NestedTestDto {
            id: Some("fixed".to_string()),
            name: None,
        }),
        ..TestDto::default()
    };

    let dto = AutoFixture::new()
        .populate(partial, &FixtureOptions::deterministic("1234", 2))
        .unwrap();

    assert_eq!(dto.list_of_ints, vec![99]);
    assert_eq!(dto.nested.unwrap().id.as_deref(), Some("fixed"));
    assert_eq!(dto.list_of_strings.len(), 2);
}
