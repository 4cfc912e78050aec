//! # AEM Notify CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Configuration resolution and validation
//! - One-shot fetch/filter/dispatch run
//!
//! All failures bubble to this top level, which logs them and exits
//! non-zero.

mod cli;
mod commands;
mod config;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{default_log_level, Cli, Commands};
use commands::{run_notifier, run_validate};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on CLI options
    init_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "AEM Notify CLI starting"
    );

    // Execute command
    let result = match &cli.command {
        Commands::Run(args) => run_notifier(args).await,
        Commands::Validate(args) => run_validate(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = format!("{e:#}"), "Command failed");
    }

    result
}

/// Initialize logging based on CLI options
///
/// The Prometheus exporter is installed separately by the run
/// orchestrator, only when a metrics port is configured.
fn init_logging(cli: &Cli) -> Result<()> {
    observability::init_with_config(observability::ObservabilityConfig {
        log_format: cli.log_format.clone().into(),
        metrics_port: None,
        default_log_level: default_log_level(cli.quiet, cli.verbose).to_string(),
    })
}
