//! Values supplied for a template's placeholders.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Field values of one record, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A bound placeholder value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text substituted verbatim.
    Scalar(String),
    /// A single record, expanded through the placeholder's fragment once.
    Record(Record),
    /// Records expanded through the placeholder's fragment once each, in order.
    RepeatedBlock(Vec<Record>),
}

impl Value {
    /// Human readable shape name used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Record(_) => "record",
            Value::RepeatedBlock(_) => "repeated block",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Vec<Record>> for Value {
    fn from(value: Vec<Record>) -> Self {
        Value::RepeatedBlock(value)
    }
}

/// Root mapping from placeholder name to value.
///
/// Built once per generation request and never mutated while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    values: IndexMap<String, Value>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a binding from a JSON object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(content)?;
        Self::try_from(value)
    }

    /// Parses a binding from a YAML mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: JsonValue = serde_yaml::from_str(content)?;
        Self::try_from(value)
    }
}

impl TryFrom<JsonValue> for Binding {
    type Error = Error;

    /// Strings, numbers and booleans become scalars, objects of those become
    /// records and arrays of such objects become repeated blocks.
    fn try_from(value: JsonValue) -> Result<Self> {
        let JsonValue::Object(map) = value else {
            return Err(invalid(
                "<root>",
                "expected an object of placeholder values",
            ));
        };

        let mut binding = Binding::new();
        for (name, value) in map {
            let value = match value {
                JsonValue::Object(fields) => Value::Record(record_from_json(&name, fields)?),
                JsonValue::Array(items) => {
                    let records = items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| match item {
                            JsonValue::Object(fields) => {
                                record_from_json(&format!("{name}[{index}]"), fields)
                            }
                            _ => Err(invalid(
                                &format!("{name}[{index}]"),
                                "repeated block items must be objects",
                            )),
                        })
                        .collect::<Result<Vec<_>>>()?;
                    Value::RepeatedBlock(records)
                }
                scalar => Value::Scalar(scalar_from_json(&name, scalar)?),
            };
            binding.insert(name, value);
        }
        Ok(binding)
    }
}

fn record_from_json(
    name: &str,
    fields: serde_json::Map<String, JsonValue>,
) -> Result<Record> {
    fields
        .into_iter()
        .map(|(field, value)| {
            let text = scalar_from_json(&format!("{name}.{field}"), value)?;
            Ok((field, text))
        })
        .collect()
}

fn scalar_from_json(name: &str, value: JsonValue) -> Result<String> {
    match value {
        JsonValue::String(text) => Ok(text),
        JsonValue::Number(number) => Ok(number.to_string()),
        JsonValue::Bool(flag) => Ok(flag.to_string()),
        JsonValue::Null => Err(invalid(name, "null is not a valid value")),
        JsonValue::Array(_) | JsonValue::Object(_) => {
            Err(invalid(name, "expected a string, number or boolean"))
        }
    }
}

fn invalid(name: &str, reason: &str) -> Error {
    Error::InvalidBinding {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
