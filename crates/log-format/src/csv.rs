//! CSV rendering: LogValue → CSV string.

use log_core::{LogEntry, LogValue};

/// Timestamp layout for CSV: millisecond precision, literal `Z`.
///
/// chrono truncates the fraction, so `.123456` renders as `.123`.
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Columns of a single CSV line, in order.
pub const CSV_LINE_FIELDS: [&str; 7] = [
    "timestamp",
    "log_level",
    "request_id",
    "source_ip",
    "method",
    "path",
    "status_code",
];

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&LogValue> for CsvValue {
    fn from(value: &LogValue) -> Self {
        match value {
            // Null - empty string
            LogValue::Null => CsvValue(String::new()),

            LogValue::Bool(b) => CsvValue(b.to_string()),
            LogValue::Int(i) => CsvValue(i.to_string()),
            LogValue::Float(f) => CsvValue(f.to_string()),
            LogValue::Text(s) => CsvValue(s.clone()),

            // Identifier - hyphenated form
            LogValue::Uuid(u) => CsvValue(u.to_string()),

            LogValue::Timestamp(dt) => CsvValue(dt.format(CSV_TIMESTAMP_FORMAT).to_string()),

            // Header maps - JSON object
            LogValue::Map(m) => CsvValue(serde_json::to_string(m).unwrap_or_default()),
        }
    }
}

impl From<LogValue> for CsvValue {
    fn from(value: LogValue) -> Self {
        CsvValue::from(&value)
    }
}

/// Escape a CSV value if it contains special characters.
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the [`CSV_LINE_FIELDS`] of an entry as one comma-separated line.
///
/// No header is produced; headers belong to the exporter.
pub fn entry_to_csv_line(entry: &LogEntry) -> String {
    let request_id = entry.request_id.to_string();
    let status_code = entry.status_code.to_string();
    let timestamp = CsvValue::from(LogValue::Timestamp(entry.timestamp)).into_inner();

    [
        timestamp.as_str(),
        entry.log_level.as_str(),
        request_id.as_str(),
        entry.source_ip.as_str(),
        entry.method.as_str(),
        entry.path.as_str(),
        status_code.as_str(),
    ]
    .iter()
    .map(|value| escape_csv(value))
    .collect::<Vec<_>>()
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_entry, REQUEST_ID};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    #[test]
    fn test_csv_line() {
        let line = entry_to_csv_line(&sample_entry());

        assert_eq!(
            line,
            format!("2024-01-15T10:30:45.123Z,WARN,{REQUEST_ID},192.168.1.20,POST,/api/v1/users/42,200")
        );
        assert_eq!(line.split(',').count(), CSV_LINE_FIELDS.len());
    }

    #[test]
    fn test_timestamp_truncated_not_rounded() {
        let dt = Utc
            .with_ymd_and_hms(2024, 1, 15, 10, 30, 45)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(999_999))
            .unwrap();

        assert_eq!(
            CsvValue::from(LogValue::Timestamp(dt)).as_str(),
            "2024-01-15T10:30:45.999Z"
        );
    }

    #[test]
    fn test_whole_second_keeps_millis() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(
            CsvValue::from(LogValue::Timestamp(dt)).as_str(),
            "2024-03-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(CsvValue::from(LogValue::Null).as_str(), "");
        assert_eq!(CsvValue::from(LogValue::Int(200)).as_str(), "200");
        assert_eq!(CsvValue::from(LogValue::Bool(true)).as_str(), "true");
        assert_eq!(CsvValue::from(LogValue::Text("x".into())).as_str(), "x");
        assert_eq!(CsvValue::from(LogValue::Map(BTreeMap::new())).as_str(), "{}");

        let id = sample_entry().request_id;
        assert_eq!(CsvValue::from(LogValue::Uuid(id)).as_str(), REQUEST_ID);
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_csv_line_escapes_fields() {
        let mut entry = sample_entry();
        entry.path = "/api/v1/search,all".to_string();

        assert!(entry_to_csv_line(&entry).contains("\"/api/v1/search,all\""));
    }
}
