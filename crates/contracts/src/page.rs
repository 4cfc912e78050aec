//! LogPage - one page of the paginated log response
//!
//! Transient structure: each page is merged into the accumulated entry
//! sequence and discarded; only the `next` link drives the loop.

use serde::{Deserialize, Serialize};

use crate::LogEntry;

/// One page of log entries plus pagination links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogPage {
    /// Entries on this page, in arrival order
    #[serde(default)]
    pub entries: Vec<LogEntry>,

    /// Pagination links
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// Pagination links block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
}

impl LogPage {
    /// Next page URL, when present and non-empty.
    ///
    /// An empty-string `next` terminates pagination the same way an absent
    /// one does.
    pub fn next_page(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .filter(|url| !url.is_empty())
    }
}
