//! Shared record types for the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use record_mapper_core::{Record, RecordDescriptorBuilder, RecordEnum, TypeTag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestEnum {
    #[serde(rename = "VALUE1")]
    Value1,
    #[serde(rename = "VALUE2")]
    Value2,
}

impl RecordEnum for TestEnum {
    fn members() -> &'static [Self] {
        &[TestEnum::Value1, TestEnum::Value2]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InheritedDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Default for InheritedDto {
    fn default() -> Self {
        Self {
            id: Some("default_id".to_string()),
            name: None,
        }
    }
}

impl Record for InheritedDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields.field("id", TypeTag::STRING).field("name", TypeTag::STRING)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedTestDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Record for NestedTestDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields.field("id", TypeTag::STRING).field("name", TypeTag::STRING)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDto {
    #[serde(flatten)]
    pub base: InheritedDto,
    pub bool_: Option<bool>,
    #[serde(rename = "enum")]
    pub enum_value: Option<TestEnum>,
    pub list_of_enums: Vec<TestEnum>,
    pub list_of_strings: Vec<String>,
    pub list_of_ints: Vec<i64>,
    pub list_of_floats: Vec<f64>,
    pub list_of_bools: Vec<bool>,
    pub date: Option<DateTime<Utc>>,
    pub list_of_dates: Vec<DateTime<Utc>>,
    pub decimal_num: Option<f64>,
    pub nested: Option<NestedTestDto>,
    pub nested_list: Vec<NestedTestDto>,
}

impl Record for TestDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
            .extends::<InheritedDto>()
            .field("bool_", TypeTag::BOOL)
            .field("enum", TypeTag::enumeration::<TestEnum>())
            .field("list_of_enums", TypeTag::list_of(TypeTag::enumeration::<TestEnum>()))
            .field("list_of_strings", TypeTag::list_of(TypeTag::STRING))
            .field("list_of_ints", TypeTag::list_of(TypeTag::INTEGER))
            .field("list_of_floats", TypeTag::list_of(TypeTag::FLOAT))
            .field("list_of_bools", TypeTag::list_of(TypeTag::BOOL))
            .field("date", TypeTag::DATETIME)
            .field("list_of_dates", TypeTag::list_of(TypeTag::DATETIME))
            .field("decimal_num", TypeTag::FLOAT)
            .field("nested", TypeTag::record::<NestedTestDto>())
            .field("nested_list", TypeTag::list_of(TypeTag::record::<NestedTestDto>()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedTestOtherDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Record for NestedTestOtherDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields.field("id", TypeTag::STRING).field("name", TypeTag::STRING)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOtherDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub bool_: Option<bool>,
    #[serde(rename = "enum")]
    pub enum_value: Option<TestEnum>,
    pub list_of_enums: Vec<TestEnum>,
    pub list_of_strings: Vec<String>,
    pub list_of_ints: Vec<i64>,
    pub list_of_floats: Vec<f64>,
    pub list_of_bools: Vec<bool>,
    pub date: Option<DateTime<Utc>>,
    pub list_of_dates: Vec<DateTime<Utc>>,
    pub decimal_num: Option<f64>,
    pub nested: Option<NestedTestOtherDto>,
    pub nested_list: Vec<NestedTestOtherDto>,
}

impl Record for TestOtherDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
            .field("id", TypeTag::STRING)
            .field("name", TypeTag::STRING)
            .field("bool_", TypeTag::BOOL)
            .field("enum", TypeTag::enumeration::<TestEnum>())
            .field("list_of_enums", TypeTag::list_of(TypeTag::enumeration::<TestEnum>()))
            .field("list_of_strings", TypeTag::list_of(TypeTag::STRING))
            .field("list_of_ints", TypeTag::list_of(TypeTag::INTEGER))
            .field("list_of_floats", TypeTag::list_of(TypeTag::FLOAT))
            .field("list_of_bools", TypeTag::list_of(TypeTag::BOOL))
            .field("date", TypeTag::DATETIME)
            .field("list_of_dates", TypeTag::list_of(TypeTag::DATETIME))
            .field("decimal_num", TypeTag::FLOAT)
            .field("nested", TypeTag::record::<NestedTestOtherDto>())
            .field(
                "nested_list",
                TypeTag::list_of(TypeTag::record::<NestedTestOtherDto>()),
            )
    }
}

/// Derived record that redeclares the inherited `id` with a different type.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub rank: Option<i64>,
}

impl Record for NumberedDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
            .extends::<InheritedDto>()
            .field("rank", TypeTag::INTEGER)
            .field("id", TypeTag::INTEGER)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchNested {
    pub c: Option<String>,
    pub d: Option<i64>,
}

impl Record for PatchNested {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields.field("c", TypeTag::STRING).field("d", TypeTag::INTEGER)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchDto {
    pub a: Option<String>,
    pub b: Option<String>,
    pub nested: Option<PatchNested>,
}

impl Record for PatchDto {
    fn describe(fields: RecordDescriptorBuilder) -> RecordDescriptorBuilder {
        fields
            .field("a", TypeTag::STRING)
            .field("b", TypeTag::STRING)
            .field("nested", TypeTag::record::<PatchNested>())
    }
}
