//! Time calculations for cache freshness.
//!
//! Cached catalog records carry the epoch-millisecond timestamp at which they were saved.
//! These helpers decide whether such a record is still inside its freshness window.

use chrono::{DateTime, Duration, Utc};

use crate::error::Error;

/// Default freshness window for the cached catalog.
pub const DEFAULT_CACHE_TTL_DAYS: i64 = 7;

/// Whether a record stored at `stored_at_millis` is still fresh at `now`.
///
/// A record is fresh while `now - stored_at < ttl`. Records stamped in the future (clock
/// skew between the writer and this reader) count as fresh. An age that does not fit in
/// an `i64` counts as stale.
///
/// # Example
/// ```ignore
/// let now = Utc::now();
/// let stored = now.timestamp_millis();
/// assert!(is_fresh(stored, now, Duration::days(7)));
/// assert!(!is_fresh(stored, now + Duration::days(7), Duration::days(7)));
/// ```
pub fn is_fresh(stored_at_millis: i64, now: DateTime<Utc>, ttl: Duration) -> bool {
    now.timestamp_millis()
        .checked_sub(stored_at_millis)
        .is_some_and(|age| age < ttl.num_milliseconds())
}

/// Parse the timestamp key's string value into epoch milliseconds.
pub fn parse_epoch_millis(value: &str) -> Result<i64, Error> {
    value.trim().parse::<i64>().map_err(|e| {
        Error::ParseError(format!(
            "Failed to parse cache timestamp {value:?} as epoch milliseconds: {e}"
        ))
    })
}
