//! Value representation for individual log fields.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// In-memory value of a single log field.
///
/// `LogValue` keeps the structured type of a field (timestamps stay
/// `DateTime<Utc>`, identifiers stay `Uuid`) so that each output format can
/// apply its own stringification rules without touching the source record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogValue {
    /// Absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// Floating point value
    Float(f64),

    /// String value
    Text(String),

    /// UUID value
    Uuid(Uuid),

    /// UTC timestamp with microsecond precision
    Timestamp(DateTime<Utc>),

    /// String-to-string mapping (headers)
    Map(BTreeMap<String, String>),
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<u16> for LogValue {
    fn from(i: u16) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<f64> for LogValue {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl From<Uuid> for LogValue {
    fn from(u: Uuid) -> Self {
        LogValue::Uuid(u)
    }
}

impl From<DateTime<Utc>> for LogValue {
    fn from(dt: DateTime<Utc>) -> Self {
        LogValue::Timestamp(dt)
    }
}

impl From<BTreeMap<String, String>> for LogValue {
    fn from(m: BTreeMap<String, String>) -> Self {
        LogValue::Map(m)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogValue::Null, Into::into)
    }
}
