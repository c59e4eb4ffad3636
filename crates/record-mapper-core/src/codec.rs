//! Case-converting JSON codec.
//!
//! Encoding serializes with serde (so enum members become their underlying
//! value and timestamps become RFC 3339 strings), then rewrites every mapping key
//! snake_case → lowerCamelCase. Decoding parses and rewrites camelCase →
//! snake_case. Key order follows input iteration order.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::case::{camel_to_snake, rewrite_keys, snake_to_camel};
use crate::error::MapperError;

/// Stateless snake/camel JSON codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseCodec;

impl CaseCodec {
    pub fn new() -> Self {
        CaseCodec
    }

    /// Serialize `value` to compact JSON with camelCase keys.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, MapperError> {
        let graph = self.to_camel_graph(value)?;
        Ok(serde_json::to_string(&graph)?)
    }

    /// Same as [`encode`](Self::encode), pretty-printed.
    pub fn encode_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, MapperError> {
        let graph = self.to_camel_graph(value)?;
        Ok(serde_json::to_string_pretty(&graph)?)
    }

    /// Encode an already-built value graph.
    pub fn encode_value(&self, value: &Value) -> Result<String, MapperError> {
        self.encode(value)
    }

    /// Serialize `value` into a value graph with camelCase keys, without rendering text.
    pub fn to_camel_graph<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, MapperError> {
        let graph = serde_json::to_value(value)?;
        Ok(rewrite_keys(graph, snake_to_camel))
    }

    /// Parse JSON text and rewrite every key to snake_case.
    pub fn decode(&self, text: &str) -> Result<Value, MapperError> {
        let parsed: Value = serde_json::from_str(text).map_err(MapperError::MalformedInput)?;
        tracing::trace!(bytes = text.len(), "decoded camelCase payload");
        Ok(rewrite_keys(parsed, camel_to_snake))
    }

    /// Decode, then deserialize the snake_case graph into `T`.
    pub fn decode_into<T: DeserializeOwned>(&self, text: &str) -> Result<T, MapperError> {
        let graph = self.decode(text)?;
        Ok(serde_json::from_value(graph)?)
    }
}
