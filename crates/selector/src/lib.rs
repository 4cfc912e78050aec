//! # Selector
//!
//! Entry filtering and ordering module.
//!
//! Pure stage between fetch and dispatch: no IO, no shared state.

use contracts::LogEntry;
use tracing::debug;

/// Retain entries matching `route_filter` and order them by timestamp.
///
/// - Retention is an exact string match on `route`; entries with a missing
///   route never match a non-empty filter.
/// - The sort is stable and ascending on the parsed timestamp: entries
///   sharing a timestamp keep their arrival order, and entries whose
///   timestamp does not parse sort before all parseable ones.
pub fn select_and_order(entries: Vec<LogEntry>, route_filter: &str) -> Vec<LogEntry> {
    let total = entries.len();

    let mut selected: Vec<LogEntry> = entries
        .into_iter()
        .filter(|entry| entry.route == route_filter)
        .collect();

    selected.sort_by_key(LogEntry::parsed_timestamp);

    debug!(
        route_filter,
        total,
        selected = selected.len(),
        "entries selected and ordered"
    );

    selected
}
