//! Loosely-typed field values
//!
//! The data file is hand-editable, so fields that are normally strings or
//! integers may hold `null`, numbers, or be missing entirely. These types read
//! anything, expose the usual typed view, and write back exactly what was read
//! until the field is overwritten.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::ops::Deref;

/// A text field. Non-string JSON values render as their JSON text (`null`
/// renders empty) and are written back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    text: String,
    raw: Option<Value>,
}

impl Text {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self { text, raw: None }
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<Value> for Text {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::from(text),
            Value::Null => Self {
                text: String::new(),
                raw: Some(Value::Null),
            },
            other => Self {
                text: other.to_string(),
                raw: Some(other),
            },
        }
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => raw.serialize(serializer),
            None => self.text.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Text::from)
    }
}

/// A record id. Integer ids (including integral floats like `3.0`) can be
/// looked up; anything else is kept but never matches a lookup. A missing id
/// stays missing on write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordId(Option<Value>);

impl RecordId {
    pub fn as_i64(&self) -> Option<i64> {
        let number = match &self.0 {
            Some(Value::Number(n)) => n,
            _ => return None,
        };
        number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(Some(Value::from(id)))
    }
}

impl PartialEq<i64> for RecordId {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

/// Lookup form for integer ids (`3.0` shows as `3`), raw text otherwise
impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.as_i64() {
            return write!(f, "{}", id);
        }
        match &self.0 {
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
            None => Ok(()),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(raw) => raw.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| RecordId(Some(value)))
    }
}
