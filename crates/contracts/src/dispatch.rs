//! Dispatch wire types and per-path delivery results
//!
//! A `DispatchEvent` is the exact JSON body posted to the dispatch API.
//! A `DispatchOutcome` records what happened to one derived path, making
//! dispatch failures an explicit value instead of an unhandled rejection.

use serde::{Deserialize, Serialize};

use crate::{LogEntry, StatusCode};

/// Fallback user recorded when a log entry carries none
pub const UNKNOWN_USER: &str = "unknown";

/// `client_payload` body of one dispatch event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPayload {
    /// Affected path (one dispatch per derived path)
    pub path: String,

    /// Acting user, `"unknown"` when the entry had none
    pub user: String,

    /// Entry timestamp, verbatim ISO-8601 string
    pub timestamp: String,

    /// Status code of the logged operation; omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusCode>,
}

/// One outbound dispatch request body: `{event_type, client_payload}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchEvent {
    /// Configured event-type label the receiving automation matches on
    pub event_type: String,

    /// Per-path payload built from the log entry
    pub client_payload: ClientPayload,
}

impl DispatchEvent {
    /// Build the event for one derived path of one log entry.
    ///
    /// Constructed fresh per path per entry; never persisted.
    pub fn for_path(event_type: &str, path: &str, entry: &LogEntry) -> Self {
        Self {
            event_type: event_type.to_string(),
            client_payload: ClientPayload {
                path: path.to_string(),
                user: entry
                    .user
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_USER.to_string()),
                timestamp: entry.timestamp.clone(),
                status: entry.status.clone(),
            },
        }
    }
}

/// Delivery result for one dispatch attempt
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryStatus {
    /// The dispatch API accepted the event
    Delivered,
    /// Dry-run mode logged the event instead of sending it
    Suppressed,
    /// The dispatch attempt failed
    Failed {
        /// HTTP status when the API answered, `None` on transport failure
        status: Option<u16>,
        message: String,
    },
}

impl DeliveryStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Per-path dispatch record collected by the emitter
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Derived path this dispatch targeted
    pub path: String,

    /// What happened to it
    pub status: DeliveryStatus,
}
