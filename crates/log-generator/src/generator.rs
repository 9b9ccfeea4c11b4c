//! Record assembly and batch generation of log entries.

use crate::generators::{
    generate_log_level, generate_method, generate_path, generate_protocol,
    generate_query_parameters, generate_referer, generate_request_id, generate_session_id,
    generate_source_ip, generate_timestamp_in, generate_timestamps, generate_user_agent,
    generate_user_id,
};
use chrono::{DateTime, Utc};
use log_core::{
    GeneratorSettings, LogCoreError, LogEntry, TimeRange, DEFAULT_RESPONSE_TIME_MS,
    DEFAULT_STATUS_CODE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// End bound earlier than start bound
    #[error("Invalid range: end ({end}) cannot be before start ({start})")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Settings error
    #[error("Settings error: {0}")]
    Settings(LogCoreError),
}

impl From<LogCoreError> for GeneratorError {
    fn from(e: LogCoreError) -> Self {
        match e {
            LogCoreError::InvalidRange { start, end } => GeneratorError::InvalidRange { start, end },
            other => GeneratorError::Settings(other),
        }
    }
}

/// Assemble one log entry from a single call to every field generator.
///
/// Fields do not depend on each other. Placeholder fields (status code,
/// response time, headers, bodies, error fields) carry fixed values.
pub fn generate_log_entry<R: Rng + ?Sized>(
    rng: &mut R,
    range: &TimeRange,
    service_name: &str,
    env: &str,
) -> LogEntry {
    LogEntry {
        timestamp: generate_timestamp_in(rng, range),
        log_level: generate_log_level(rng),
        request_id: generate_request_id(rng),
        source_ip: generate_source_ip(rng),
        method: generate_method(rng),
        path: generate_path(rng),
        query_parameters: generate_query_parameters(rng),
        protocol: generate_protocol(rng),
        user_agent: generate_user_agent(rng),
        referer: generate_referer(rng),
        user_id: generate_user_id(rng),
        session_id: generate_session_id(rng),
        status_code: DEFAULT_STATUS_CODE,
        response_time_ms: DEFAULT_RESPONSE_TIME_MS,
        request_headers: BTreeMap::new(),
        request_body: String::new(),
        response_headers: BTreeMap::new(),
        response_body: String::new(),
        service_name: service_name.to_string(),
        env: env.to_string(),
        error_message: String::new(),
        stack_trace: String::new(),
    }
}

/// Generator that produces log entries from a seeded RNG.
///
/// With a fixed seed and a pinned time range the output is reproducible.
/// Without a pinned range the "3 years ago .. now" window is recomputed for
/// every entry.
pub struct LogGenerator {
    /// Settings providing the time window and fixed field values
    settings: GeneratorSettings,
    /// Random number generator shared by every field generator
    rng: StdRng,
    /// Number of entries produced so far
    index: u64,
    /// Sort record batches by timestamp
    chronological: bool,
}

impl LogGenerator {
    /// Create a generator from settings.
    ///
    /// Uses `settings.seed` when present, OS entropy otherwise.
    pub fn new(settings: GeneratorSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::from_rng(settings, rng)
    }

    /// Create a generator with default settings and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorSettings {
            seed: Some(seed),
            ..Default::default()
        })
    }

    /// Create a generator driven by an explicit RNG.
    pub fn from_rng(settings: GeneratorSettings, rng: StdRng) -> Self {
        Self {
            settings,
            rng,
            index: 0,
            chronological: false,
        }
    }

    /// Sort every record batch by timestamp.
    ///
    /// Off by default: each entry draws its own timestamp and batches carry
    /// no cross-record ordering.
    pub fn with_chronological(mut self, chronological: bool) -> Self {
        self.chronological = chronological;
        self
    }

    /// Number of entries produced so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate a single entry.
    pub fn next_entry(&mut self) -> Result<LogEntry, GeneratorError> {
        let range = self.settings.time_range()?;
        let entry = generate_log_entry(
            &mut self.rng,
            &range,
            &self.settings.service_name,
            &self.settings.env,
        );
        self.index += 1;
        Ok(entry)
    }

    /// Generate `count` entries.
    ///
    /// `count == 0` yields an empty batch. On error no partial batch is
    /// returned.
    pub fn entries(&mut self, count: usize) -> Result<Vec<LogEntry>, GeneratorError> {
        // Fail before drawing anything if the configured window is inverted
        self.settings.time_range()?;

        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(self.next_entry()?);
        }

        if self.chronological {
            entries.sort_by_key(|entry| entry.timestamp);
        }

        debug!("Generated {} log entries", entries.len());
        Ok(entries)
    }

    /// Lazily generate `count` entries.
    ///
    /// The iterator never reorders; use [`Self::entries`] for chronological
    /// batches.
    pub fn entry_iter(&mut self, count: usize) -> LogEntryIterator<'_> {
        LogEntryIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate `count` timestamps within the configured window.
    ///
    /// With `sort` the result is non-decreasing. This is independent of
    /// record assembly.
    pub fn timestamps(
        &mut self,
        count: usize,
        sort: bool,
    ) -> Result<Vec<DateTime<Utc>>, GeneratorError> {
        let range = self.settings.time_range()?;
        Ok(generate_timestamps(&mut self.rng, count, &range, sort))
    }
}

/// Iterator that lazily generates log entries.
pub struct LogEntryIterator<'a> {
    generator: &'a mut LogGenerator,
    remaining: usize,
}

impl Iterator for LogEntryIterator<'_> {
    type Item = Result<LogEntry, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LogEntryIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log_core::FIELD_NAMES;
    use std::collections::HashSet;

    fn january_settings(seed: u64) -> GeneratorSettings {
        GeneratorSettings {
            seed: Some(seed),
            start: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_single_entry() {
        let mut generator = LogGenerator::with_seed(42);
        let entry = generator.next_entry().unwrap();

        assert_eq!(entry.status_code, 200);
        assert_eq!(entry.response_time_ms, 150);
        assert!(entry.request_headers.is_empty());
        assert!(entry.response_headers.is_empty());
        assert_eq!(entry.service_name, "api-service");
        assert_eq!(entry.env, "production");
        assert!(entry.path.starts_with("/api/v1/"));
        assert_eq!(entry.request_id.get_version_num(), 4);
        assert_eq!(entry.to_record().field_names(), FIELD_NAMES.to_vec());
    }

    #[test]
    fn test_batch_sizes() {
        let mut generator = LogGenerator::with_seed(42);

        for count in [0, 1, 5, 37] {
            assert_eq!(generator.entries(count).unwrap().len(), count);
        }
        assert_eq!(generator.current_index(), 43);
    }

    #[test]
    fn test_empty_batch() {
        let mut generator = LogGenerator::with_seed(42);
        assert!(generator.entries(0).unwrap().is_empty());
        assert!(generator.timestamps(0, true).unwrap().is_empty());
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = LogGenerator::new(january_settings(42));
        let mut gen2 = LogGenerator::new(january_settings(42));

        assert_eq!(gen1.entries(20).unwrap(), gen2.entries(20).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = LogGenerator::new(january_settings(1));
        let mut gen2 = LogGenerator::new(january_settings(2));

        assert_ne!(gen1.entries(5).unwrap(), gen2.entries(5).unwrap());
    }

    #[test]
    fn test_request_ids_unique_in_batch() {
        let mut generator = LogGenerator::with_seed(42);
        let entries = generator.entries(100).unwrap();
        let ids: HashSet<_> = entries.iter().map(|e| e.request_id).collect();

        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_timestamps_within_configured_range() {
        let settings = january_settings(42);
        let range = settings.time_range().unwrap();
        let mut generator = LogGenerator::new(settings);

        for entry in generator.entries(100).unwrap() {
            assert!(range.contains(&entry.timestamp));
        }
    }

    #[test]
    fn test_default_window_recomputed() {
        let mut generator = LogGenerator::with_seed(42);
        let before = Utc::now();
        let entry = generator.next_entry().unwrap();

        assert!(entry.timestamp <= Utc::now());
        assert!(entry.timestamp >= before - chrono::Duration::days(3 * 365 + 1));
    }

    #[test]
    fn test_chronological_batch() {
        let mut generator = LogGenerator::new(january_settings(42)).with_chronological(true);
        let entries = generator.entries(50).unwrap();

        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_sorted_timestamps() {
        let mut generator = LogGenerator::new(january_settings(42));
        let timestamps = generator.timestamps(50, true).unwrap();

        assert_eq!(timestamps.len(), 50);
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_inverted_range_fails() {
        let settings = GeneratorSettings {
            start: Some(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()),
            end: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..january_settings(42)
        };
        let mut generator = LogGenerator::new(settings);

        assert!(matches!(
            generator.entries(10),
            Err(GeneratorError::InvalidRange { .. })
        ));
        assert!(matches!(
            generator.timestamps(10, true),
            Err(GeneratorError::InvalidRange { .. })
        ));
        assert_eq!(generator.current_index(), 0);
    }

    #[test]
    fn test_entry_iter() {
        let mut generator = LogGenerator::with_seed(42);
        let iter = generator.entry_iter(7);
        assert_eq!(iter.len(), 7);

        let entries: Result<Vec<_>, _> = iter.collect();
        assert_eq!(entries.unwrap().len(), 7);
        assert_eq!(generator.current_index(), 7);
    }

    #[test]
    fn test_custom_service_fields() {
        let settings = GeneratorSettings {
            service_name: "billing".to_string(),
            env: "staging".to_string(),
            ..january_settings(42)
        };
        let entry = LogGenerator::new(settings).next_entry().unwrap();

        assert_eq!(entry.service_name, "billing");
        assert_eq!(entry.env, "staging");
    }
}
