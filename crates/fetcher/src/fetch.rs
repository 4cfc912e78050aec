//! LogFetcher - paginated log retrieval
//!
//! One GET per page, strictly sequential: page N+1 is never requested
//! before page N completes. The accumulated sequence preserves arrival
//! order across pages.

use contracts::{ContractError, LogEntry, LogPage};
use metrics::counter;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use tracing::{info, warn};

/// Hard cap on page requests per run.
///
/// Reaching the cap is not an error: the loop logs a warning and returns
/// whatever was accumulated.
pub const PAGE_CAP: u32 = 1000;

/// Authenticated client for the admin log API
pub struct LogFetcher {
    client: reqwest::Client,
    site_label: String,
    admin_token: String,
}

impl LogFetcher {
    /// Create a fetcher for one site
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(
        site_label: impl Into<String>,
        admin_token: impl Into<String>,
    ) -> Result<Self, ContractError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("aem-notify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContractError::other(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            site_label: site_label.into(),
            admin_token: admin_token.into(),
        })
    }

    /// Fetch all log entries newer than `from`.
    ///
    /// Follows `links.next` until the last page or [`PAGE_CAP`] requests,
    /// whichever comes first.
    ///
    /// # Errors
    /// - Any page answering a non-success status aborts the whole fetch
    ///   with the status and diagnostic body; nothing is retried.
    /// - A body that does not decode as a log page aborts likewise.
    pub async fn fetch_since(
        &self,
        base_url: &str,
        from: &str,
    ) -> Result<Vec<LogEntry>, ContractError> {
        let first = Url::parse_with_params(base_url, &[("from", from)])
            .map_err(|e| ContractError::fetch_transport(base_url, format!("invalid URL: {e}")))?;

        let mut entries: Vec<LogEntry> = Vec::new();
        let mut next_url = Some(first.to_string());
        let mut page_num: u32 = 0;

        while let Some(url) = next_url.take() {
            page_num += 1;
            let page = self.fetch_page(&url).await?;

            let next = page.next_page().map(str::to_string);
            let page_count = page.entries.len();
            entries.extend(page.entries);
            counter!("aem_notify_log_pages_total").increment(1);
            counter!("aem_notify_log_entries_total").increment(page_count as u64);

            info!(
                site = %self.site_label,
                page = page_num,
                url = %url,
                entries = page_count,
                total = entries.len(),
                "log page fetched"
            );

            match next {
                Some(next) if page_num >= PAGE_CAP => {
                    warn!(
                        site = %self.site_label,
                        pages = page_num,
                        next = %next,
                        "page cap reached, returning truncated results"
                    );
                }
                Some(next) => next_url = Some(next),
                None => {}
            }
        }

        Ok(entries)
    }

    async fn fetch_page(&self, url: &str) -> Result<LogPage, ContractError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("token {}", self.admin_token))
            .send()
            .await
            .map_err(|e| ContractError::fetch_transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Body is read for diagnostics only.
            let body = response.text().await.unwrap_or_default();
            return Err(ContractError::fetch_status(url, status.as_u16(), body));
        }

        response
            .json::<LogPage>()
            .await
            .map_err(|e| ContractError::fetch_transport(url, format!("decode failed: {e}")))
    }
}
