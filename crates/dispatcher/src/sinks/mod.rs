//! Sink implementations
//!
//! Contains GithubSink and DryRunSink.

mod dry_run;
mod github;

pub use self::dry_run::DryRunSink;
pub use self::github::GithubSink;
