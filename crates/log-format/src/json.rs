//! JSON rendering: LogEntry → JSON line.

use crate::FormatError;
use log_core::LogEntry;

/// Render an entry as a single-line JSON object.
///
/// `timestamp` becomes an RFC 3339 string and `request_id` its hyphenated
/// form; every other field keeps its JSON-native shape.
pub fn entry_to_json(entry: &LogEntry) -> Result<String, FormatError> {
    Ok(serde_json::to_string(entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_entry, REQUEST_ID};
    use log_core::FIELD_NAMES;
    use serde_json::json;

    #[test]
    fn test_json_round_trip() {
        let entry = sample_entry();
        let line = entry_to_json(&entry).unwrap();

        assert!(!line.contains('\n'));
        let parsed: LogEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_json_stringifies_timestamp_and_request_id() {
        let line = entry_to_json(&sample_entry()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["request_id"], REQUEST_ID);
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(timestamp.starts_with("2024-01-15T10:30:45.123456"));
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["protocol"], "HTTP/2");
        assert_eq!(value["request_headers"], json!({}));
    }

    #[test]
    fn test_json_has_every_field() {
        let line = entry_to_json(&sample_entry()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), FIELD_NAMES.len());
        for name in FIELD_NAMES {
            assert!(object.contains_key(name), "{name}");
        }
    }
}
