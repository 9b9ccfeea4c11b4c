//! Validated timestamp windows.

use crate::error::LogCoreError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Length of the default window ending "now" (3 years).
pub const DEFAULT_WINDOW_DAYS: i64 = 3 * 365;

/// Closed interval `[start, end]` of UTC instants with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a range, failing when `end` is earlier than `start`.
    ///
    /// Bounds are never swapped.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, LogCoreError> {
        if end < start {
            return Err(LogCoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window of `days` days ending at the current instant.
    ///
    /// "Now" is read on every call.
    pub fn trailing_days(days: i64) -> Result<Self, LogCoreError> {
        let end = Utc::now();
        let start = window_start(end, days)?;
        Ok(Self { start, end })
    }

    /// Range covering whole calendar days: from midnight of `start` to the
    /// last microsecond of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, LogCoreError> {
        let start = start.and_time(NaiveTime::MIN).and_utc();
        let end = end_of_day(end);
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

/// Instant `days` days before `end`.
///
/// Fails for negative windows and for windows reaching past the
/// representable date range.
pub fn window_start(end: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, LogCoreError> {
    if days < 0 {
        return Err(LogCoreError::InvalidWindow(days));
    }
    Duration::try_days(days)
        .and_then(|window| end.checked_sub_signed(window))
        .ok_or(LogCoreError::InvalidWindow(days))
}

/// Last representable microsecond of the given day, in UTC.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    midnight + Duration::days(1) - Duration::microseconds(1)
}
