//! # Contracts
//!
//! Frozen interface contracts, defining inter-crate data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are
//! prohibited.
//!
//! ## Time Model
//! - Log entries carry ISO-8601 timestamp strings exactly as the log API
//!   produced them; the raw string flows through into dispatch payloads.
//! - Ordering uses the parsed value (`LogEntry::parsed_timestamp`); entries
//!   whose timestamp does not parse sort before all parseable ones.

mod config;
mod dispatch;
mod entry;
mod error;
mod page;
mod sink;

pub use config::*;
pub use dispatch::*;
pub use entry::*;
pub use error::*;
pub use page::*;
pub use sink::*;
