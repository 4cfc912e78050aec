//! DryRunSink - logs the would-be dispatch instead of sending it

use contracts::{ContractError, DeliveryStatus, DispatchEvent, DispatchSink};
use tracing::info;

/// Sink for local runs: no network call, one log line per event
pub struct DryRunSink;

impl DispatchSink for DryRunSink {
    fn name(&self) -> &str {
        "dry_run"
    }

    async fn deliver(&self, event: &DispatchEvent) -> Result<DeliveryStatus, ContractError> {
        info!(
            path = %event.client_payload.path,
            event_type = %event.event_type,
            user = %event.client_payload.user,
            timestamp = %event.client_payload.timestamp,
            "dry run: dispatch suppressed"
        );
        Ok(DeliveryStatus::Suppressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::LogEntry;

    #[tokio::test]
    async fn test_dry_run_suppresses() {
        let entry: LogEntry = serde_json::from_str(r#"{"path": "/x"}"#).unwrap();
        let event = DispatchEvent::for_path("evt", "/x", &entry);

        let status = DryRunSink.deliver(&event).await.unwrap();
        assert_eq!(status, DeliveryStatus::Suppressed);
    }

    #[test]
    fn test_dry_run_name() {
        assert_eq!(DryRunSink.name(), "dry_run");
    }
}
