use std::collections::HashMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record as the range query service returns it: every field wrapped in a
/// single-entry, type-tagged value.
pub type RawRecord = HashMap<String, AttributeValue>;

/// A record with every field unwrapped to plain JSON. This is the shape that
/// gets cached and returned to callers.
pub type Item = serde_json::Map<String, Value>;

/// Type-tagged attribute value, serialized as `{"S": "..."}`, `{"N": "..."}`
/// and so on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    #[serde(rename = "S")]
    S(String),
    /// Numbers keep their wire text.
    #[serde(rename = "N")]
    N(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "L")]
    L(Vec<AttributeValue>),
    #[serde(rename = "M")]
    M(HashMap<String, AttributeValue>),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    /// Binary values unwrap to standard base64 text.
    #[serde(rename = "B")]
    B(Vec<u8>),
    #[serde(rename = "BS")]
    Bs(Vec<Vec<u8>>),
    /// Empty wrapper, or a tag this crate does not understand.
    #[serde(skip)]
    Unknown,
}

impl AttributeValue {
    pub fn s(value: impl Into<String>) -> Self { Self::S(value.into()) }

    pub fn n(value: impl ToString) -> Self { Self::N(value.to_string()) }

    /// Unwraps the value held inside the tag. Lists and maps are unwrapped
    /// recursively; `None` if an `Unknown` wrapper appears at any depth.
    pub fn unwrap_value(&self) -> Option<Value> {
        let value = match self {
            Self::S(s) | Self::N(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Null(_) => Value::Null,
            Self::L(values) => Value::Array(
                values
                    .iter()
                    .map(AttributeValue::unwrap_value)
                    .collect::<Option<Vec<_>>>()?,
            ),
            Self::M(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| v.unwrap_value().map(|v| (k.clone(), v)))
                    .collect::<Option<serde_json::Map<_, _>>>()?,
            ),
            Self::Ss(values) | Self::Ns(values) => Value::Array(
                values.iter().cloned().map(Value::String).collect(),
            ),
            Self::B(bytes) => Value::String(STANDARD.encode(bytes)),
            Self::Bs(values) => Value::Array(
                values
                    .iter()
                    .map(|bytes| Value::String(STANDARD.encode(bytes)))
                    .collect(),
            ),
            Self::Unknown => return None,
        };
        Some(value)
    }
}
