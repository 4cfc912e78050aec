//! `run` command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::RunArgs;
use crate::config::resolve;
use crate::pipeline::NotifierRun;

/// Execute the `run` command
pub async fn run_notifier(args: &RunArgs) -> Result<()> {
    let config = resolve(&args.common)?;

    // Fatal before any network activity.
    config_loader::validate(&config).context("Configuration validation failed")?;

    info!(
        site = %config.site_label(),
        route_filter = %config.route_filter,
        local_run = config.local_run,
        "Configuration resolved"
    );

    let metrics_port = if args.metrics_port == 0 {
        None
    } else {
        Some(args.metrics_port)
    };

    let run = NotifierRun::new(config, metrics_port);
    let stats = run.run().await?;

    info!(
        entries_fetched = stats.entries_fetched,
        entries_selected = stats.entries_selected,
        delivered = stats.dispatches.delivered,
        failed = stats.dispatches.failed,
        duration_secs = stats.duration.as_secs_f64(),
        "Run completed"
    );

    stats.print_summary();

    // Under the continue policy the run still fails when any path failed.
    if stats.dispatches.has_failures() {
        anyhow::bail!(
            "{} of {} dispatches failed",
            stats.dispatches.failed,
            stats.dispatches.attempted
        );
    }

    Ok(())
}
