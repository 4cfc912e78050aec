//! DispatchEmitter - sequential per-path event emission

use contracts::{
    ContractError, DeliveryStatus, DispatchEvent, DispatchOutcome, DispatchSink, FailurePolicy,
    LogEntry,
};
use metrics::counter;
use tracing::{error, info, instrument};

use crate::metrics::{DispatchMetrics, MetricsSnapshot};
use crate::paths::derive_paths;

/// Emits one dispatch event per derived path, strictly in
/// entry-then-path order.
pub struct DispatchEmitter<S: DispatchSink> {
    sink: S,
    event_type: String,
    add_md_suffix: bool,
    failure_policy: FailurePolicy,
    metrics: DispatchMetrics,
}

impl<S: DispatchSink> DispatchEmitter<S> {
    /// Create an emitter over the given sink
    pub fn new(
        sink: S,
        event_type: impl Into<String>,
        add_md_suffix: bool,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            sink,
            event_type: event_type.into(),
            add_md_suffix,
            failure_policy,
            metrics: DispatchMetrics::new(),
        }
    }

    /// Counter snapshot for the run summary
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Emit dispatch events for every derived path of every entry.
    ///
    /// Delivery is sequential; path M+1 of an entry is never attempted
    /// before path M resolved, and entries are processed in input order.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Abort`] the first delivery failure is
    /// returned and the remaining paths are skipped. Under
    /// [`FailurePolicy::Continue`] failures become `Failed` outcomes and
    /// every path is attempted.
    #[instrument(name = "dispatch_emit_all", skip(self, entries), fields(sink = self.sink.name(), entries = entries.len()))]
    pub async fn emit_all(
        &self,
        entries: &[LogEntry],
    ) -> Result<Vec<DispatchOutcome>, ContractError> {
        let mut outcomes = Vec::new();

        for entry in entries {
            for path in derive_paths(entry, self.add_md_suffix) {
                let event = DispatchEvent::for_path(&self.event_type, &path, entry);
                self.metrics.inc_attempted();
                counter!("aem_notify_dispatches_attempted_total").increment(1);

                match self.sink.deliver(&event).await {
                    Ok(status) => {
                        self.record(&path, &status);
                        outcomes.push(DispatchOutcome { path, status });
                    }
                    Err(err) => {
                        self.metrics.inc_failed();
                        counter!("aem_notify_dispatches_failed_total").increment(1);
                        error!(path = %path, error = %err, "dispatch failed");

                        if self.failure_policy == FailurePolicy::Abort {
                            return Err(err);
                        }

                        outcomes.push(DispatchOutcome {
                            path,
                            status: failure_status(err),
                        });
                    }
                }
            }
        }

        Ok(outcomes)
    }

    fn record(&self, path: &str, status: &DeliveryStatus) {
        match status {
            DeliveryStatus::Delivered => {
                self.metrics.inc_delivered();
                counter!("aem_notify_dispatches_delivered_total").increment(1);
                info!(path = %path, event_type = %self.event_type, "dispatch delivered");
            }
            DeliveryStatus::Suppressed => {
                self.metrics.inc_suppressed();
                counter!("aem_notify_dispatches_suppressed_total").increment(1);
            }
            DeliveryStatus::Failed { .. } => {
                self.metrics.inc_failed();
                counter!("aem_notify_dispatches_failed_total").increment(1);
            }
        }
    }
}

/// Fold a delivery error into a `Failed` outcome status
fn failure_status(err: ContractError) -> DeliveryStatus {
    match err {
        ContractError::Dispatch {
            status, message, ..
        } => DeliveryStatus::Failed { status, message },
        other => DeliveryStatus::Failed {
            status: None,
            message: other.to_string(),
        },
    }
}
