//! LogEntry - Log Fetcher output
//!
//! One access-log line as reported by the admin log API. Entries are
//! produced read-only by the fetcher and consumed read-only downstream.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Status code as reported by the log API.
///
/// The upstream field is loosely typed: some deployments report a numeric
/// code, others a string. The value is passed through to dispatch payloads
/// unchanged either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One access-log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Route tag selecting downstream action (e.g. "live" vs "preview")
    #[serde(default)]
    pub route: String,

    /// ISO-8601 timestamp string, kept verbatim
    #[serde(default)]
    pub timestamp: String,

    /// Acting user; dispatch payloads substitute "unknown" when absent
    #[serde(default)]
    pub user: Option<String>,

    /// Status code of the logged operation
    #[serde(default)]
    pub status: Option<StatusCode>,

    /// Primary affected path
    #[serde(default)]
    pub path: String,

    /// Additional affected paths, in reported order.
    ///
    /// Deserialized leniently: a present-but-not-a-sequence value is treated
    /// as absent, and non-string elements are dropped.
    #[serde(default, deserialize_with = "lenient_paths")]
    pub paths: Option<Vec<String>>,
}

impl LogEntry {
    /// Parse the entry timestamp.
    ///
    /// Accepts RFC 3339 and zone-less ISO-8601 (interpreted as UTC).
    /// Returns `None` when the string does not parse.
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok().or_else(|| {
            NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
    }
}

/// Accept `paths` only when it is a proper sequence; keep string elements.
fn lenient_paths<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
