// src/domain/article/publish.rs
use chrono::{DateTime, Utc};

/// Resolve `published_at` for a requested publish flag.
///
/// | current | requested | result |
/// |---------|-----------|--------|
/// | false   | true      | `now` (first publish) |
/// | true    | false     | `None` |
/// | same    | same      | unchanged |
///
/// Unpublishing discards the earlier timestamp, so a later republish is
/// stamped as a fresh publish.
pub fn compute_published_at(
    current_published: bool,
    current_published_at: Option<DateTime<Utc>>,
    requested_published: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (current_published, requested_published) {
        (false, true) => Some(now),
        (true, false) => None,
        _ => current_published_at,
    }
}
