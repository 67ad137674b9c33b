//! Custom contact property values.
//!
//! Properties travel as bare JSON scalars with no type tag, so decoding
//! probes the raw value in a fixed order: timestamp, boolean, number, text.
//! A JSON string that parses as an RFC 3339 date-time is therefore always a
//! [`CustomPropertyValue::Timestamp`], and a numeric string such as `"123"`
//! stays [`CustomPropertyValue::Text`].

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value of a caller-defined contact property.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomPropertyValue {
    /// Free-form text.
    Text(String),
    /// Double-precision number.
    Number(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Point in time, sent as an ISO-8601 string.
    Timestamp(DateTime<Utc>),
}

impl CustomPropertyValue {
    /// The text value, if this is a [`CustomPropertyValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric value, if this is a [`CustomPropertyValue::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The flag, if this is a [`CustomPropertyValue::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The instant, if this is a [`CustomPropertyValue::Timestamp`].
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl Serialize for CustomPropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) if !n.is_finite() => Err(ser::Error::custom(format!(
                "property number must be finite, got {n}"
            ))),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Timestamp(t) => {
                serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

struct PropertyVisitor;

impl<'de> Visitor<'de> for PropertyVisitor {
    type Value = CustomPropertyValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value matches none of string/number/bool/date")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        // Order matters: a date-shaped string is a timestamp, not text.
        match DateTime::parse_from_rfc3339(v) {
            Ok(t) => Ok(CustomPropertyValue::Timestamp(t.with_timezone(&Utc))),
            Err(_) => Ok(CustomPropertyValue::Text(v.to_string())),
        }
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        match DateTime::parse_from_rfc3339(&v) {
            Ok(t) => Ok(CustomPropertyValue::Timestamp(t.with_timezone(&Utc))),
            Err(_) => Ok(CustomPropertyValue::Text(v)),
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(CustomPropertyValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(CustomPropertyValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(CustomPropertyValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(CustomPropertyValue::Number(v))
    }
}

impl<'de> Deserialize<'de> for CustomPropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropertyVisitor)
    }
}

impl From<&str> for CustomPropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CustomPropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CustomPropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CustomPropertyValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for CustomPropertyValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for CustomPropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for CustomPropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}
