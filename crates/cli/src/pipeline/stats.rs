//! Run statistics and summary output.

use std::time::Duration;

use observability::DispatchTally;

/// Statistics from one notifier run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Entries accumulated across all fetched pages
    pub entries_fetched: usize,

    /// Entries surviving the route filter
    pub entries_selected: usize,

    /// Dispatch outcome tally (attempted/delivered/suppressed/failed)
    pub dispatches: DispatchTally,

    /// Total duration of the run
    pub duration: Duration,
}

impl RunStats {
    /// Entries per second over the whole run
    pub fn throughput(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.entries_fetched as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        let summary = self.dispatches.summary();

        println!("\n=== Run Summary ===\n");
        println!("Duration: {:.2}s", self.duration.as_secs_f64());
        println!("Entries fetched:  {}", self.entries_fetched);
        println!("Entries selected: {}", self.entries_selected);
        println!("Throughput: {:.2} entries/s", self.throughput());
        println!("Dispatches:");
        println!("  attempted:  {}", summary.attempted);
        println!("  delivered:  {}", summary.delivered);
        println!("  suppressed: {}", summary.suppressed);
        println!("  failed:     {}", summary.failed);

        if !self.dispatches.failures.is_empty() {
            println!("\nFailed paths:");
            for (path, detail) in &self.dispatches.failures {
                println!("  - {path}: {detail}");
            }
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput() {
        let stats = RunStats {
            entries_fetched: 100,
            duration: Duration::from_secs(4),
            ..Default::default()
        };
        assert!((stats.throughput() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_throughput_zero_duration() {
        assert_eq!(RunStats::default().throughput(), 0.0);
    }
}
