//! Traditional access-log line rendering.

use log_core::LogEntry;

/// Second precision, no zone suffix.
pub const LOG_LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `{timestamp} [{LEVEL}] {request_id} {ip} {method} {path} {status}`.
pub fn entry_to_log_line(entry: &LogEntry) -> String {
    format!(
        "{} [{}] {} {} {} {} {}",
        entry.timestamp.format(LOG_LINE_TIMESTAMP_FORMAT),
        entry.log_level,
        entry.request_id,
        entry.source_ip,
        entry.method,
        entry.path,
        entry.status_code
    )
}
