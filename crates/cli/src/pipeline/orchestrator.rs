//! Run orchestrator - sequences fetch, select, dispatch.
//!
//! One linear pass per invocation with early exits when zero entries are
//! fetched or zero entries survive filtering.

use std::time::Instant;

use anyhow::{Context, Result};
use contracts::RunConfig;
use dispatcher::{DispatchEmitter, DryRunSink, GithubSink};
use fetcher::LogFetcher;
use observability::DispatchTally;
use selector::select_and_order;
use tracing::info;

use super::RunStats;

/// One notifier run
pub struct NotifierRun {
    config: RunConfig,
    metrics_port: Option<u16>,
}

impl NotifierRun {
    /// Create a run over a resolved configuration
    pub fn new(config: RunConfig, metrics_port: Option<u16>) -> Self {
        Self {
            config,
            metrics_port,
        }
    }

    /// Run to completion.
    ///
    /// Fails fast on the first fetch error; dispatch failures follow the
    /// configured failure policy.
    pub async fn run(self) -> Result<RunStats> {
        let start_time = Instant::now();
        let config = &self.config;

        // Initialize Metrics (optional)
        if let Some(port) = self.metrics_port {
            observability::init_metrics_only(port)?;
            info!("Metrics endpoint available on port {}", port);
        }

        let from = config.effective_from();
        info!(
            site = %config.site_label(),
            log_url = %config.log_url,
            from = %from,
            "Fetching log entries"
        );

        let fetcher = LogFetcher::new(config.site_label(), &config.admin_token)
            .context("Failed to build log fetcher")?;
        let entries = fetcher
            .fetch_since(&config.log_url, &from)
            .await
            .context("Log fetch failed")?;

        let mut stats = RunStats {
            entries_fetched: entries.len(),
            ..Default::default()
        };

        if entries.is_empty() {
            info!(site = %config.site_label(), "No new log entries, nothing to dispatch");
            stats.duration = start_time.elapsed();
            return Ok(stats);
        }

        let selected = select_and_order(entries, &config.route_filter);
        stats.entries_selected = selected.len();

        if selected.is_empty() {
            info!(
                route_filter = %config.route_filter,
                fetched = stats.entries_fetched,
                "No entries matched the route filter"
            );
            stats.duration = start_time.elapsed();
            return Ok(stats);
        }

        info!(
            selected = selected.len(),
            local_run = config.local_run,
            "Dispatching events"
        );

        // Sink selection is the only difference between a real and a dry run.
        let outcomes = if config.local_run {
            DispatchEmitter::new(
                DryRunSink,
                &config.dispatch_event,
                config.add_md_suffix,
                config.failure_policy,
            )
            .emit_all(&selected)
            .await
        } else {
            let sink = GithubSink::new(config.dispatch_url(), &config.github_token)
                .context("Failed to build dispatch sink")?;
            DispatchEmitter::new(
                sink,
                &config.dispatch_event,
                config.add_md_suffix,
                config.failure_policy,
            )
            .emit_all(&selected)
            .await
        }
        .context("Dispatch failed")?;

        let mut tally = DispatchTally::new();
        tally.record_all(&outcomes);
        stats.dispatches = tally;
        stats.duration = start_time.elapsed();

        Ok(stats)
    }
}
