//! Forward conversion: LogValue → PostgreSQL value.

use chrono::{DateTime, Utc};
use log_core::{LogRecord, LogValue};
use uuid::Uuid;

/// PostgreSQL value wrapper for type-safe conversions.
///
/// Each variant maps onto a type a PostgreSQL client can bind directly.
#[derive(Debug, Clone, PartialEq)]
pub enum PostgreSQLValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit floating point
    Float64(f64),
    /// Text/string value
    Text(String),
    /// UUID value
    Uuid(Uuid),
    /// Timestamp with timezone
    TimestampTz(DateTime<Utc>),
    /// JSON value
    Json(serde_json::Value),
}

impl PostgreSQLValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PostgreSQLValue::Null)
    }
}

impl From<&LogValue> for PostgreSQLValue {
    fn from(value: &LogValue) -> Self {
        match value {
            LogValue::Null => PostgreSQLValue::Null,
            LogValue::Bool(b) => PostgreSQLValue::Bool(*b),
            LogValue::Int(i) => PostgreSQLValue::Int64(*i),
            LogValue::Float(f) => PostgreSQLValue::Float64(*f),
            LogValue::Text(s) => PostgreSQLValue::Text(s.clone()),
            LogValue::Uuid(u) => PostgreSQLValue::Uuid(*u),
            LogValue::Timestamp(dt) => PostgreSQLValue::TimestampTz(*dt),
            // Header maps go to JSONB columns
            LogValue::Map(m) => PostgreSQLValue::Json(serde_json::json!(m)),
        }
    }
}

impl From<LogValue> for PostgreSQLValue {
    fn from(value: LogValue) -> Self {
        PostgreSQLValue::from(&value)
    }
}

/// Build one parameter row per record, in `columns` order.
///
/// Fields a record lacks become [`PostgreSQLValue::Null`].
pub fn insert_values(records: &[LogRecord], columns: &[&str]) -> Vec<Vec<PostgreSQLValue>> {
    records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map(PostgreSQLValue::from)
                        .unwrap_or(PostgreSQLValue::Null)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::column_names;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, minute, 0).unwrap()
    }

    #[test]
    fn test_scalar_conversions() {
        let dt = ts(30);
        let id = Uuid::new_v4();

        assert_eq!(
            PostgreSQLValue::from(LogValue::Timestamp(dt)),
            PostgreSQLValue::TimestampTz(dt)
        );
        assert_eq!(PostgreSQLValue::from(LogValue::Uuid(id)), PostgreSQLValue::Uuid(id));
        assert_eq!(PostgreSQLValue::from(LogValue::Int(42)), PostgreSQLValue::Int64(42));
        assert_eq!(
            PostgreSQLValue::from(LogValue::Text("192.168.1.1".into())),
            PostgreSQLValue::Text("192.168.1.1".into())
        );
        assert_eq!(
            PostgreSQLValue::from(LogValue::Text(String::new())),
            PostgreSQLValue::Text(String::new())
        );
        assert!(PostgreSQLValue::from(LogValue::Null).is_null());
    }

    #[test]
    fn test_map_becomes_json() {
        let mut headers = BTreeMap::new();
        headers.insert("accept".to_string(), "application/json".to_string());

        assert_eq!(
            PostgreSQLValue::from(LogValue::Map(headers)),
            PostgreSQLValue::Json(serde_json::json!({"accept": "application/json"}))
        );
    }

    #[test]
    fn test_insert_values() {
        let records = vec![
            LogRecord::new()
                .field("timestamp", ts(30))
                .field("request_id", Uuid::new_v4())
                .field("log_level", "INFO")
                .field("status_code", 200u16),
            LogRecord::new()
                .field("timestamp", ts(31))
                .field("request_id", Uuid::new_v4())
                .field("log_level", "ERROR")
                .field("status_code", 500u16),
        ];
        let columns = ["timestamp", "request_id", "log_level", "status_code"];

        let rows = insert_values(&records, &columns);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(rows[0][0], PostgreSQLValue::TimestampTz(ts(30)));
        assert!(matches!(rows[0][1], PostgreSQLValue::Uuid(_)));
        assert_eq!(rows[1][2], PostgreSQLValue::Text("ERROR".into()));
        assert_eq!(rows[1][3], PostgreSQLValue::Int64(500));
    }

    #[test]
    fn test_missing_fields_are_null() {
        let records = vec![LogRecord::new()
            .field("timestamp", ts(30))
            .field("log_level", "INFO")];
        let columns = ["timestamp", "request_id", "log_level", "status_code"];

        let rows = insert_values(&records, &columns);
        let row = &rows[0];

        assert!(!row[0].is_null());
        assert!(row[1].is_null());
        assert_eq!(row[2], PostgreSQLValue::Text("INFO".into()));
        assert!(row[3].is_null());
    }

    #[test]
    fn test_full_table_row() {
        let records = vec![LogRecord::new().field("status_code", 200u16)];
        let rows = insert_values(&records, &column_names());
        let row = &rows[0];

        assert_eq!(row.len(), 23);
        assert_eq!(row.iter().filter(|v| !v.is_null()).count(), 1);
    }

    #[test]
    fn test_empty_batch() {
        assert!(insert_values(&[], &["timestamp", "request_id"]).is_empty());
    }
}
