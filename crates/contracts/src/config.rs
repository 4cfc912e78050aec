//! RunConfig - immutable per-run configuration
//!
//! Built once at process start from CLI/env/config-file sources and passed
//! explicitly into the driver; downstream components receive only the
//! fields they need instead of querying global state.

use chrono::{Local, SecondsFormat};

/// Default route filter applied when none is configured
pub const DEFAULT_ROUTE_FILTER: &str = "live";

/// Default dispatch API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// What the run does when a dispatch POST fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// First dispatch failure aborts the remaining run
    #[default]
    Abort,
    /// Attempt every remaining path; the run still fails if any path failed
    Continue,
}

impl FailurePolicy {
    /// Parse a policy label (`abort` / `continue`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "abort" => Some(Self::Abort),
            "continue" => Some(Self::Continue),
            _ => None,
        }
    }
}

/// Immutable configuration for one notifier run
#[derive(Clone)]
pub struct RunConfig {
    /// Admin token for the log API (`Authorization: token ...`)
    pub admin_token: String,

    /// GitHub organization owning the dispatch target repository
    pub org: String,

    /// Dispatch target repository name
    pub repo: String,

    /// Log endpoint URL queried with `?from=...`
    pub log_url: String,

    /// Route tag selecting which entries trigger dispatches
    pub route_filter: String,

    /// Append `.md` to derived paths without a `.`
    pub add_md_suffix: bool,

    /// `event_type` label stamped on every dispatch event
    pub dispatch_event: String,

    /// Token for the dispatch API
    pub github_token: String,

    /// Dispatch API base URL (overridable for tests)
    pub github_api_url: String,

    /// Lower bound for "new" entries; `None` = yesterday at local midnight
    pub last_run: Option<String>,

    /// Dry-run mode: log dispatches instead of sending them
    pub local_run: bool,

    /// Dispatch failure policy
    pub failure_policy: FailurePolicy,
}

impl RunConfig {
    /// `org/repo` label used in log lines
    pub fn site_label(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }

    /// Effective `from` timestamp for the log query.
    ///
    /// Uses the configured last-run marker when present, otherwise
    /// yesterday at local midnight.
    pub fn effective_from(&self) -> String {
        if let Some(ts) = self.last_run.as_deref() {
            if !ts.is_empty() {
                return ts.to_string();
            }
        }
        Self::yesterday_midnight()
    }

    /// Yesterday at 00:00:00 local time, RFC 3339
    pub fn yesterday_midnight() -> String {
        let now = Local::now();
        let today = now.date_naive();
        let yesterday = today.pred_opt().unwrap_or(today);
        yesterday
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| naive.and_local_timezone(Local).earliest())
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false))
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    /// Dispatch endpoint for the configured repository
    pub fn dispatch_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/dispatches",
            self.github_api_url.trim_end_matches('/'),
            self.org,
            self.repo
        )
    }
}

// Tokens are masked; a Debug-printed config must be safe to log.
impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("admin_token", &mask(&self.admin_token))
            .field("org", &self.org)
            .field("repo", &self.repo)
            .field("log_url", &self.log_url)
            .field("route_filter", &self.route_filter)
            .field("add_md_suffix", &self.add_md_suffix)
            .field("dispatch_event", &self.dispatch_event)
            .field("github_token", &mask(&self.github_token))
            .field("github_api_url", &self.github_api_url)
            .field("last_run", &self.last_run)
            .field("local_run", &self.local_run)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "***"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig {
            admin_token: "admin-secret".to_string(),
            org: "acme".to_string(),
            repo: "site".to_string(),
            log_url: "https://admin.hlx.page/log/acme/site/main".to_string(),
            route_filter: DEFAULT_ROUTE_FILTER.to_string(),
            add_md_suffix: false,
            dispatch_event: "aem-publish".to_string(),
            github_token: "gh-secret".to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            last_run: None,
            local_run: false,
            failure_policy: FailurePolicy::default(),
        }
    }

    #[test]
    fn test_site_label() {
        assert_eq!(config().site_label(), "acme/site");
    }

    #[test]
    fn test_dispatch_url() {
        assert_eq!(
            config().dispatch_url(),
            "https://api.github.com/repos/acme/site/dispatches"
        );

        let mut cfg = config();
        cfg.github_api_url = "http://127.0.0.1:9999/".to_string();
        assert_eq!(
            cfg.dispatch_url(),
            "http://127.0.0.1:9999/repos/acme/site/dispatches"
        );
    }

    #[test]
    fn test_effective_from_prefers_last_run() {
        let mut cfg = config();
        cfg.last_run = Some("2026-08-20T12:00:00Z".to_string());
        assert_eq!(cfg.effective_from(), "2026-08-20T12:00:00Z");
    }

    #[test]
    fn test_effective_from_empty_marker_falls_back() {
        let mut cfg = config();
        cfg.last_run = Some(String::new());
        assert_eq!(cfg.effective_from(), RunConfig::yesterday_midnight());
    }

    #[test]
    fn test_yesterday_midnight_parses_and_is_midnight() {
        let ts = RunConfig::yesterday_midnight();
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.time(), chrono::NaiveTime::MIN);
    }

    #[test]
    fn test_debug_masks_tokens() {
        let repr = format!("{:?}", config());
        assert!(!repr.contains("admin-secret"));
        assert!(!repr.contains("gh-secret"));
        assert!(repr.contains("***"));
    }

    #[test]
    fn test_failure_policy_labels() {
        assert_eq!(FailurePolicy::from_label("abort"), Some(FailurePolicy::Abort));
        assert_eq!(
            FailurePolicy::from_label("CONTINUE"),
            Some(FailurePolicy::Continue)
        );
        assert_eq!(FailurePolicy::from_label("retry"), None);
    }
}
