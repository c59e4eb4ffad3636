//! Error types for mapping, codec and fixture operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable error codes.
///
/// Variant names and their serialized `snake_case` strings are part of the
/// public contract; callers translate them into their own error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// A record type has no usable field descriptor.
    TypeIntrospectionError,
    /// Text handed to the decoder is not well-formed JSON.
    MalformedInputError,
    /// Exactly one of seed/index was supplied to the fixture generator.
    InvalidFixtureArgumentsError,
    /// The fixture generator could not build an instance of the type.
    FixtureConstructionError,
    /// JSON (de)serialization of a record failed.
    JsonError,
}

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Cannot introspect {type_name}: {message}")]
    TypeIntrospection { type_name: String, message: String },

    #[error("Malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("Invalid fixture arguments: {0}")]
    InvalidFixtureArguments(String),

    #[error("Cannot construct fixture for {type_name}: {message}")]
    FixtureConstruction { type_name: String, message: String },

    #[error("JSON (de)serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapperError {
    pub(crate) fn introspection(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        MapperError::TypeIntrospection {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    pub(crate) fn fixture(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        MapperError::FixtureConstruction {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code for this error variant.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            MapperError::TypeIntrospection { .. } => ErrorCode::TypeIntrospectionError,
            MapperError::MalformedInput(_) => ErrorCode::MalformedInputError,
            MapperError::InvalidFixtureArguments(_) => ErrorCode::InvalidFixtureArgumentsError,
            MapperError::FixtureConstruction { .. } => ErrorCode::FixtureConstructionError,
            MapperError::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Returns the record type the error refers to, if known.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            MapperError::TypeIntrospection { type_name, .. } => Some(type_name),
            MapperError::FixtureConstruction { type_name, .. } => Some(type_name),
            MapperError::MalformedInput(_)
            | MapperError::InvalidFixtureArguments(_)
            | MapperError::Json(_) => None,
        }
    }

    /// Produces a structured JSON error.
    ///
    /// Format: `{"code": "...", "message": "...", "type_name": "..." | null}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "type_name": self.type_name(),
        })
    }
}
