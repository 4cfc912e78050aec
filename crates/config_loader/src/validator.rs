//! Config validation
//!
//! Validation rules:
//! - admin token present
//! - org / repo present
//! - dispatch event label present
//! - dispatch token present
//!
//! Runs before any network activity; a missing required field fails the
//! process with the offending field named.

use contracts::{ContractError, RunConfig};

/// Validate an assembled RunConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &RunConfig) -> Result<(), ContractError> {
    require("admin_token", &config.admin_token)?;
    require("org", &config.org)?;
    require("repo", &config.repo)?;
    require("dispatch_event", &config.dispatch_event)?;
    require("github_token", &config.github_token)?;
    require("log_url", &config.log_url)?;
    Ok(())
}

fn require(field: &str, value: &str) -> Result<(), ContractError> {
    if value.trim().is_empty() {
        return Err(ContractError::config_validation(
            field,
            "required configuration is missing or empty",
        ));
    }
    Ok(())
}
