//! Configuration resolution: flags/env over file over defaults.

use anyhow::{bail, Context, Result};
use config_loader::{ConfigLoader, FileConfig};
use contracts::{FailurePolicy, RunConfig, DEFAULT_GITHUB_API_URL, DEFAULT_ROUTE_FILTER};

use crate::cli::ConfigArgs;

/// Assemble the immutable `RunConfig` for this invocation.
///
/// Does not validate required fields; `config_loader::validate` runs
/// afterwards so missing configuration is reported with the field name.
pub fn resolve(args: &ConfigArgs) -> Result<RunConfig> {
    let file = match &args.config {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => FileConfig::default(),
    };

    let org = pick(&args.org, file.org).unwrap_or_default();
    let repo = pick(&args.repo, file.repo).unwrap_or_default();

    let log_url = pick(&args.log_url, file.log_url)
        .unwrap_or_else(|| format!("https://admin.hlx.page/log/{org}/{repo}/main"));

    let failure_policy = match args.on_dispatch_error {
        Some(policy) => policy.into(),
        None => match file.on_dispatch_error.as_deref() {
            Some(label) => match FailurePolicy::from_label(label) {
                Some(policy) => policy,
                None => bail!("invalid on_dispatch_error '{label}' (expected abort or continue)"),
            },
            None => FailurePolicy::default(),
        },
    };

    Ok(RunConfig {
        admin_token: pick(&args.admin_token, file.admin_token).unwrap_or_default(),
        org,
        repo,
        log_url,
        route_filter: pick(&args.route_filter, file.route_filter)
            .unwrap_or_else(|| DEFAULT_ROUTE_FILTER.to_string()),
        add_md_suffix: args.add_md_suffix.or(file.add_md_suffix).unwrap_or(false),
        dispatch_event: pick(&args.dispatch_event, file.dispatch_event).unwrap_or_default(),
        github_token: pick(&args.github_token, file.github_token).unwrap_or_default(),
        github_api_url: pick(&args.github_api_url, file.github_api_url)
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        last_run: pick(&args.last_run, file.last_run),
        local_run: args.local_run.or(file.local_run).unwrap_or(false),
        failure_policy,
    })
}

fn pick(arg: &Option<String>, file: Option<String>) -> Option<String> {
    arg.clone().or(file)
}
