//! Pipeline orchestration module.

mod orchestrator;
mod stats;

pub use orchestrator::NotifierRun;
pub use stats::RunStats;
