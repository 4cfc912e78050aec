//! # Dispatcher
//!
//! Dispatch emission module.
//!
//! Responsibilities:
//! - Derive target paths from ordered log entries
//! - Emit one dispatch event per path, strictly sequentially
//! - Record per-path outcomes instead of dropping failures

pub mod emitter;
pub mod metrics;
pub mod paths;
pub mod sinks;

pub use contracts::{DispatchEvent, DispatchOutcome, DispatchSink};
pub use emitter::DispatchEmitter;
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use paths::derive_paths;
pub use sinks::{DryRunSink, GithubSink};
