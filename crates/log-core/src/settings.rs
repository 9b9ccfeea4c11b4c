//! Generator settings loaded from YAML.
//!
//! Every key is optional:
//!
//! ```yaml
//! seed: 42
//! start: 2024-01-01T00:00:00Z
//! end: 2024-01-31T23:59:59Z
//! window_days: 1095
//! service_name: checkout-api
//! env: staging
//! ```

use crate::entry::{DEFAULT_ENVIRONMENT, DEFAULT_SERVICE_NAME};
use crate::error::LogCoreError;
use crate::range::{window_start, TimeRange, DEFAULT_WINDOW_DAYS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the generator and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Seed for reproducible output; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Lower timestamp bound; defaults to `end - window_days`
    pub start: Option<DateTime<Utc>>,

    /// Upper timestamp bound; defaults to the current instant
    pub end: Option<DateTime<Utc>>,

    /// Length of the rolling window used when `start` is unset
    pub window_days: i64,

    pub service_name: String,

    pub env: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: None,
            start: None,
            end: None,
            window_days: DEFAULT_WINDOW_DAYS,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            env: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LogCoreError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LogCoreError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolve the timestamp window.
    ///
    /// Unset bounds are computed from the current instant each time this is
    /// called, so a long-running process never works from a stale "now".
    pub fn time_range(&self) -> Result<TimeRange, LogCoreError> {
        match (self.start, self.end) {
            (None, None) => TimeRange::trailing_days(self.window_days),
            (start, end) => {
                let end = end.unwrap_or_else(Utc::now);
                let start = match start {
                    Some(start) => start,
                    None => window_start(end, self.window_days)?,
                };
                TimeRange::new(start, end)
            }
        }
    }

    /// Whether both bounds are pinned, i.e. [`Self::time_range`] is stable across calls.
    pub fn has_fixed_range(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}
