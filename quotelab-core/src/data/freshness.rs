//! The 24-hour freshness window for provider timestamps.
//!
//! Staleness is a hard business rule: a quote older than one day is treated
//! exactly like a failed fetch, so downstream consumers never see it. The
//! functions here are pure over `(timestamp, now)` so tests can pin the clock.

use chrono::{DateTime, Duration, Utc};

/// Maximum accepted quote age.
pub const MAX_QUOTE_AGE_HOURS: i64 = 24;

/// Age of a quote timestamp relative to `now`.
///
/// A timestamp that does not map to a valid UTC instant is treated as epoch,
/// which the gate then rejects as stale. Unknown symbols surface this way:
/// the provider reports `t = 0` for them.
pub fn quote_age(timestamp: i64, now: DateTime<Utc>) -> Duration {
    let observed = DateTime::from_timestamp(timestamp, 0).unwrap_or(DateTime::UNIX_EPOCH);
    now.signed_duration_since(observed)
}

/// True when the quote is younger than the 24-hour window.
///
/// Future-dated timestamps (negative age) pass: the gate only rejects data
/// the provider reports as old.
pub fn is_fresh(timestamp: i64, now: DateTime<Utc>) -> bool {
    quote_age(timestamp, now) < Duration::hours(MAX_QUOTE_AGE_HOURS)
}
