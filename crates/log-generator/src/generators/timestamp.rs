//! Timestamp value generators.

use crate::generator::GeneratorError;
use chrono::{DateTime, Utc};
use log_core::TimeRange;
use rand::Rng;

/// Generate a uniformly random instant in `[start, end]`.
///
/// Fails with [`GeneratorError::InvalidRange`] when `end < start`; the
/// bounds are never swapped.
pub fn generate_timestamp<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DateTime<Utc>, GeneratorError> {
    let range = TimeRange::new(start, end)?;
    Ok(generate_timestamp_in(rng, &range))
}

/// Generate a uniformly random instant within an already validated range.
///
/// The result has microsecond precision and never falls outside the range.
pub fn generate_timestamp_in<R: Rng + ?Sized>(rng: &mut R, range: &TimeRange) -> DateTime<Utc> {
    let low = ceil_micros(&range.start());
    let high = range.end().timestamp_micros();

    // Range narrower than one microsecond
    if low > high {
        return range.start();
    }

    let micros = rng.random_range(low..=high);
    DateTime::from_timestamp_micros(micros).unwrap_or(range.start())
}

/// Generate `count` instants in `[start, end]`.
///
/// With `sort` the result is non-decreasing; otherwise it is in generation
/// order.
pub fn generate_timestamps<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: &TimeRange,
    sort: bool,
) -> Vec<DateTime<Utc>> {
    let mut timestamps: Vec<DateTime<Utc>> = (0..count)
        .map(|_| generate_timestamp_in(rng, range))
        .collect();
    if sort {
        timestamps.sort();
    }
    timestamps
}

fn ceil_micros(dt: &DateTime<Utc>) -> i64 {
    let micros = dt.timestamp_micros();
    if dt.timestamp_subsec_nanos() % 1_000 == 0 {
        micros
    } else {
        micros + 1
    }
}
