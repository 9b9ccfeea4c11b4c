//! Log entry and the ordered record view used by exporters.

use crate::types::{HttpMethod, HttpProtocol, LogLevel};
use crate::values::LogValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Status code placed on every entry until a status generator exists.
pub const DEFAULT_STATUS_CODE: u16 = 200;

/// Response time placed on every entry until a latency generator exists.
pub const DEFAULT_RESPONSE_TIME_MS: u32 = 150;

pub const DEFAULT_SERVICE_NAME: &str = "api-service";

pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Canonical field order of a [`LogEntry`].
pub const FIELD_NAMES: [&str; 22] = [
    "timestamp",
    "log_level",
    "request_id",
    "source_ip",
    "method",
    "path",
    "query_parameters",
    "protocol",
    "user_agent",
    "referer",
    "user_id",
    "session_id",
    "status_code",
    "response_time_ms",
    "request_headers",
    "request_body",
    "response_headers",
    "response_body",
    "service_name",
    "env",
    "error_message",
    "stack_trace",
];

/// One synthesized HTTP request/response event.
///
/// Field declaration order matches [`FIELD_NAMES`], so the structured
/// (JSON) rendering lists keys in the canonical order as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub log_level: LogLevel,
    pub request_id: Uuid,
    pub source_ip: String,
    pub method: HttpMethod,
    pub path: String,
    pub query_parameters: String,
    pub protocol: HttpProtocol,
    pub user_agent: String,
    pub referer: String,
    pub user_id: String,
    pub session_id: String,
    pub status_code: u16,
    pub response_time_ms: u32,
    pub request_headers: BTreeMap<String, String>,
    pub request_body: String,
    pub response_headers: BTreeMap<String, String>,
    pub response_body: String,
    pub service_name: String,
    pub env: String,
    pub error_message: String,
    pub stack_trace: String,
}

impl LogEntry {
    /// Convert to an ordered field/value record in canonical field order.
    pub fn to_record(&self) -> LogRecord {
        LogRecord::new()
            .field("timestamp", self.timestamp)
            .field("log_level", self.log_level.as_str())
            .field("request_id", self.request_id)
            .field("source_ip", self.source_ip.as_str())
            .field("method", self.method.as_str())
            .field("path", self.path.as_str())
            .field("query_parameters", self.query_parameters.as_str())
            .field("protocol", self.protocol.as_str())
            .field("user_agent", self.user_agent.as_str())
            .field("referer", self.referer.as_str())
            .field("user_id", self.user_id.as_str())
            .field("session_id", self.session_id.as_str())
            .field("status_code", self.status_code)
            .field("response_time_ms", self.response_time_ms)
            .field("request_headers", self.request_headers.clone())
            .field("request_body", self.request_body.as_str())
            .field("response_headers", self.response_headers.clone())
            .field("response_body", self.response_body.as_str())
            .field("service_name", self.service_name.as_str())
            .field("env", self.env.as_str())
            .field("error_message", self.error_message.as_str())
            .field("stack_trace", self.stack_trace.as_str())
    }
}

impl From<&LogEntry> for LogRecord {
    fn from(entry: &LogEntry) -> Self {
        entry.to_record()
    }
}

/// Ordered field/value mapping.
///
/// Iteration order is insertion order. Exporters derive their default column
/// order from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogRecord {
    fields: Vec<(String, LogValue)>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<LogValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field. An existing field keeps its position and gets the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<LogValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&LogValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LogValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<LogValue>> FromIterator<(K, V)> for LogRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = LogRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> LogEntry {
        LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap(),
            log_level: LogLevel::Info,
            request_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            source_ip: "10.0.0.1".to_string(),
            method: HttpMethod::Get,
            path: "/api/v1/users".to_string(),
            query_parameters: String::new(),
            protocol: HttpProtocol::Http2,
            user_agent: "Mozilla/5.0".to_string(),
            referer: String::new(),
            user_id: String::new(),
            session_id: String::new(),
            status_code: DEFAULT_STATUS_CODE,
            response_time_ms: DEFAULT_RESPONSE_TIME_MS,
            request_headers: BTreeMap::new(),
            request_body: String::new(),
            response_headers: BTreeMap::new(),
            response_body: String::new(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            env: DEFAULT_ENVIRONMENT.to_string(),
            error_message: String::new(),
            stack_trace: String::new(),
        }
    }

    #[test]
    fn test_record_has_canonical_order() {
        let record = sample_entry().to_record();
        assert_eq!(record.field_names(), FIELD_NAMES.to_vec());
        assert_eq!(record.len(), 22);
    }

    #[test]
    fn test_record_values() {
        let entry = sample_entry();
        let record = entry.to_record();
        assert_eq!(record.get("timestamp"), Some(&LogValue::Timestamp(entry.timestamp)));
        assert_eq!(record.get("request_id"), Some(&LogValue::Uuid(entry.request_id)));
        assert_eq!(record.get("protocol"), Some(&LogValue::from("HTTP/2")));
        assert_eq!(record.get("status_code"), Some(&LogValue::Int(200)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_json_key_order() {
        let json = serde_json::to_string(&sample_entry()).unwrap();
        let mut last = 0;
        for name in FIELD_NAMES {
            let pos = json.find(&format!("\"{name}\":")).unwrap();
            assert!(pos >= last, "{name} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record: LogRecord = [("a", 1i64), ("b", 2i64)].into_iter().collect();
        record.insert("a", 10i64);
        assert_eq!(record.field_names(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&LogValue::Int(10)));
    }
}
