//! Pluggable record serialization.

use serde_json::Value;

use crate::error::Result;

/// Converts records to and from the strings kept in key-value storage.
///
/// Implementations must round-trip every JSON-representable value.
pub trait Serializer {
    fn stringify(&self, value: &Value) -> Result<String>;

    fn parse(&self, data: &str) -> Result<Value>;
}

/// Compact JSON, the default serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn stringify(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn parse(&self, data: &str) -> Result<Value> {
        Ok(serde_json::from_str(data)?)
    }
}

impl<T: Serializer + ?Sized> Serializer for Box<T> {
    fn stringify(&self, value: &Value) -> Result<String> {
        (**self).stringify(value)
    }

    fn parse(&self, data: &str) -> Result<Value> {
        (**self).parse(data)
    }
}
