//! # Fetcher
//!
//! Log retrieval module.
//!
//! Responsibilities:
//! - Authenticated paginated GET loop against the admin log endpoint
//! - Accumulate entries across pages in arrival order
//! - Enforce the hard page cap without failing the run

mod fetch;

pub use fetch::{LogFetcher, PAGE_CAP};
