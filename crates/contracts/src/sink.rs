//! DispatchSink trait - Dispatch Emitter output interface
//!
//! Defines the abstract interface for dispatch sinks.

use crate::{ContractError, DeliveryStatus, DispatchEvent};

/// Dispatch delivery trait
///
/// All sink implementations (real API, dry-run) implement this trait.
#[trait_variant::make(DispatchSink: Send)]
pub trait LocalDispatchSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Deliver one dispatch event
    ///
    /// # Errors
    /// Returns a dispatch error carrying the target path and, when the API
    /// answered, the HTTP status.
    async fn deliver(&self, event: &DispatchEvent) -> Result<DeliveryStatus, ContractError>;
}
