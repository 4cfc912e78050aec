//! Emitter metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one emitter run
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Dispatch events built and handed to the sink
    attempted: AtomicU64,
    /// Events the dispatch API accepted
    delivered: AtomicU64,
    /// Events suppressed by dry-run mode
    suppressed: AtomicU64,
    /// Events that failed to deliver
    failed: AtomicU64,
}

impl DispatchMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get attempted count
    pub fn attempted(&self) -> u64 {
        self.attempted.load(Ordering::Relaxed)
    }

    /// Increment attempted count
    pub fn inc_attempted(&self) {
        self.attempted.fetch_add(1, Ordering::Relaxed);
    }

    /// Get delivered count
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Increment delivered count
    pub fn inc_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Get suppressed count
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    /// Increment suppressed count
    pub fn inc_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failed count
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Increment failed count
    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            attempted: self.attempted(),
            delivered: self.delivered(),
            suppressed: self.suppressed(),
            failed: self.failed(),
        }
    }
}

/// Snapshot of emitter counters (for reporting)
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub attempted: u64,
    pub delivered: u64,
    pub suppressed: u64,
    pub failed: u64,
}
