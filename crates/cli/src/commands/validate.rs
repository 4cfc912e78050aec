//! `validate` command implementation.

use anyhow::{Context, Result};
use contracts::{FailurePolicy, RunConfig, DEFAULT_GITHUB_API_URL};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;
use crate::config::resolve;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    site: String,
    log_url: String,
    route_filter: String,
    dispatch_event: String,
    add_md_suffix: bool,
    local_run: bool,
    failure_policy: String,
    effective_from: String,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!("Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config = match resolve(&args.common) {
        Ok(config) => config,
        Err(e) => {
            return ValidationResult {
                valid: false,
                error: Some(format!("{e:#}")),
                warnings: None,
                summary: None,
            }
        }
    };

    if let Err(e) = config_loader::validate(&config) {
        return ValidationResult {
            valid: false,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        };
    }

    let warnings = collect_warnings(&config);

    ValidationResult {
        valid: true,
        error: None,
        warnings: if warnings.is_empty() {
            None
        } else {
            Some(warnings)
        },
        summary: Some(ConfigSummary {
            site: config.site_label(),
            log_url: config.log_url.clone(),
            route_filter: config.route_filter.clone(),
            dispatch_event: config.dispatch_event.clone(),
            add_md_suffix: config.add_md_suffix,
            local_run: config.local_run,
            failure_policy: match config.failure_policy {
                FailurePolicy::Abort => "abort".to_string(),
                FailurePolicy::Continue => "continue".to_string(),
            },
            effective_from: config.effective_from(),
        }),
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(config: &RunConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(last_run) = config.last_run.as_deref() {
        if !last_run.is_empty() && chrono::DateTime::parse_from_rfc3339(last_run).is_err() {
            warnings.push(format!(
                "last_run '{last_run}' is not a valid RFC 3339 timestamp - the log API may reject it"
            ));
        }
    }

    if config.local_run {
        warnings.push("local_run is active - dispatches will be logged, not sent".to_string());
    }

    if config.github_api_url != DEFAULT_GITHUB_API_URL {
        warnings.push(format!(
            "dispatch API base overridden to {}",
            config.github_api_url
        ));
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid");

        if let Some(ref summary) = result.summary {
            println!("\n  Site: {}", summary.site);
            println!("  Log URL: {}", summary.log_url);
            println!("  Route filter: {}", summary.route_filter);
            println!("  Dispatch event: {}", summary.dispatch_event);
            println!("  Markdown suffix: {}", summary.add_md_suffix);
            println!("  Failure policy: {}", summary.failure_policy);
            println!("  Effective from: {}", summary.effective_from);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid");
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
