//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use contracts::FailurePolicy;
use std::path::PathBuf;

/// AEM Notify - access-log to repository_dispatch bridge
#[derive(Parser, Debug)]
#[command(
    name = "aem-notify",
    author,
    version,
    about = "AEM Live log notifier",
    long_about = "Polls the AEM Live admin log for entries newer than the last run,\n\
                  filters them by route, orders them by timestamp, and emits one\n\
                  repository_dispatch event per affected path."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "AEM_NOTIFY_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "AEM_NOTIFY_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the notifier once: fetch, filter, dispatch
    Run(RunArgs),

    /// Resolve and validate configuration without any network call
    Validate(ValidateArgs),
}

/// Configuration sources shared by `run` and `validate`.
///
/// Flags and environment variables take precedence over config-file
/// values; file values take precedence over built-in defaults. The
/// environment variable names are fixed by the external interface.
#[derive(Parser, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to optional configuration file (TOML or JSON)
    #[arg(short, long, env = "AEM_NOTIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Admin token for the log API
    #[arg(long, env = "AEM_LIVE_ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: Option<String>,

    /// GitHub organization of the dispatch target repository
    #[arg(long, env = "ORG")]
    pub org: Option<String>,

    /// Dispatch target repository name
    #[arg(long, env = "REPO")]
    pub repo: Option<String>,

    /// Log endpoint URL (default: admin log URL derived from org/repo)
    #[arg(long, env = "AEM_LIVE_LOG_URL")]
    pub log_url: Option<String>,

    /// Route tag entries must match to trigger a dispatch
    #[arg(long, env = "ROUTE_FILTER")]
    pub route_filter: Option<String>,

    /// Append .md to derived paths without a '.'
    #[arg(
        long,
        env = "ADD_MD_SUFFIX",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub add_md_suffix: Option<bool>,

    /// event_type label stamped on every dispatch event
    #[arg(long, env = "REPOSITORY_DISPATCH_EVENT")]
    pub dispatch_event: Option<String>,

    /// ISO timestamp of the previous run (default: yesterday local midnight)
    #[arg(long, env = "LAST_RUN_ISO")]
    pub last_run: Option<String>,

    /// Token for the dispatch API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Dispatch API base URL override
    #[arg(long, env = "GITHUB_API_URL")]
    pub github_api_url: Option<String>,

    /// Dry-run mode: log dispatches instead of sending them
    #[arg(
        long,
        env = "LOCAL_RUN",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub local_run: Option<bool>,

    /// What to do when a dispatch POST fails
    #[arg(long, value_enum, env = "ON_DISPATCH_ERROR")]
    pub on_dispatch_error: Option<DispatchErrorPolicy>,
}

/// Arguments for the `run` command
#[derive(Parser, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: ConfigArgs,

    /// Prometheus metrics port (0 = disabled)
    #[arg(long, default_value = "0", env = "AEM_NOTIFY_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: ConfigArgs,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Dispatch failure policy label
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DispatchErrorPolicy {
    /// First dispatch failure aborts the remaining run
    Abort,
    /// Attempt every path; fail the run at the end if any failed
    Continue,
}

impl From<DispatchErrorPolicy> for FailurePolicy {
    fn from(policy: DispatchErrorPolicy) -> Self {
        match policy {
            DispatchErrorPolicy::Abort => FailurePolicy::Abort,
            DispatchErrorPolicy::Continue => FailurePolicy::Continue,
        }
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => observability::LogFormat::Json,
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
        }
    }
}

/// Default log level derived from the quiet/verbose flags; `RUST_LOG`
/// still overrides it inside the subscriber's env filter.
pub fn default_log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
