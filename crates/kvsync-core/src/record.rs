//! Records and their identifiers.

use std::fmt;

use serde_json::{Map, Number, Value};

use crate::error::{Result, StoreError};

/// Identifier attribute used when none is configured.
pub const DEFAULT_ID_ATTRIBUTE: &str = "id";

/// String form of a record identifier, as it appears in keys and the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id from an attribute value; `None` for null.
    ///
    /// Strings are taken verbatim and numbers in their shortest decimal
    /// form, so `7`, `7.0` and `"7"` address the same entry. Anything else
    /// uses its JSON text.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(number_text(n))),
            other => Some(Self(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Text of a number as a browser prints it: integral floats drop the
/// fraction, and exponents are used from `1e21` up and below `1e-6`.
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => {
            let text = format!("{:e}", f);
            match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => {
                    format!("{}e+{}", mantissa, exp)
                }
                _ => text,
            }
        }
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// A model's serialisable attributes plus the name of its id attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id_attribute: String,
    attributes: Map<String, Value>,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Create an empty record using the default `id` attribute.
    pub fn new() -> Self {
        Self {
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
            attributes: Map::new(),
        }
    }

    /// Build a record from a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(attributes) => Ok(Self {
                id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
                attributes,
            }),
            other => Err(StoreError::InvalidArgument(format!(
                "record must be a JSON object, got {}",
                other
            ))),
        }
    }

    /// Use `name` as the identifier attribute (e.g. `"_id"`).
    pub fn with_id_attribute(mut self, name: impl Into<String>) -> Self {
        self.id_attribute = name.into();
        self
    }

    pub fn id_attribute(&self) -> &str {
        &self.id_attribute
    }

    /// The record's identifier, if defined and non-null.
    pub fn id(&self) -> Option<RecordId> {
        self.attributes
            .get(&self.id_attribute)
            .and_then(RecordId::from_value)
    }

    /// Whether `create` must assign a fresh identifier.
    ///
    /// Absent, null, `""` and `false` count as missing; numeric `0` is a
    /// valid identifier.
    pub fn needs_id(&self) -> bool {
        match self.attributes.get(&self.id_attribute) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        }
    }

    /// Assign `id` to the identifier attribute.
    pub fn set_id(&mut self, id: RecordId) {
        self.attributes
            .insert(self.id_attribute.clone(), Value::String(id.0));
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: Value) {
        self.attributes.insert(attribute.into(), value);
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Serialisable projection handed to the serializer.
    pub fn to_value(&self) -> Value {
        Value::Object(self.attributes.clone())
    }
}
