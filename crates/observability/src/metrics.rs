//! Dispatch outcome aggregation
//!
//! In-memory tally of per-path dispatch results, used to build the run
//! summary printed at the end of a `run`.

use contracts::{DeliveryStatus, DispatchOutcome};

/// Per-run dispatch tally
///
/// Aggregates outcomes in memory so the driver can report the run result
/// without re-walking the outcome list.
#[derive(Debug, Clone, Default)]
pub struct DispatchTally {
    /// Total paths a dispatch was attempted for
    pub attempted: u64,

    /// Paths the dispatch API accepted
    pub delivered: u64,

    /// Paths suppressed by dry-run mode
    pub suppressed: u64,

    /// Paths whose dispatch failed
    pub failed: u64,

    /// Failed paths with their failure messages, in attempt order
    pub failures: Vec<(String, String)>,
}

impl DispatchTally {
    /// Create a new tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one per-path outcome
    pub fn record(&mut self, outcome: &DispatchOutcome) {
        self.attempted += 1;
        match &outcome.status {
            DeliveryStatus::Delivered => self.delivered += 1,
            DeliveryStatus::Suppressed => self.suppressed += 1,
            DeliveryStatus::Failed { status, message } => {
                self.failed += 1;
                let detail = match status {
                    Some(code) => format!("status {code}: {message}"),
                    None => message.clone(),
                };
                self.failures.push((outcome.path.clone(), detail));
            }
        }
    }

    /// Record every outcome of a run
    pub fn record_all<'a>(&mut self, outcomes: impl IntoIterator<Item = &'a DispatchOutcome>) {
        for outcome in outcomes {
            self.record(outcome);
        }
    }

    /// True when any path failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Generate summary report
    pub fn summary(&self) -> TallySummary {
        TallySummary {
            attempted: self.attempted,
            delivered: self.delivered,
            suppressed: self.suppressed,
            failed: self.failed,
            failure_rate: if self.attempted > 0 {
                self.failed as f64 / self.attempted as f64 * 100.0
            } else {
                0.0
            },
        }
    }

}

/// Tally summary
#[derive(Debug, Clone, Copy, Default)]
pub struct TallySummary {
    pub attempted: u64,
    pub delivered: u64,
    pub suppressed: u64,
    pub failed: u64,
    pub failure_rate: f64,
}
