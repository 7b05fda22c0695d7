//! Live adapter for the `TrackingReportSource` port over HTTP.

use reqwest::Client;
use serde_json::Value;

use crate::ports::{PortError, PortFuture, TrackingReportSource};

/// Default location of the per-release tracking reports.
pub const DEFAULT_TRACKER_URL: &str =
    "http://reqorts.qa.ubuntu.com/reports/rls-mgr/rls-{letter}{letter}-tracking.json";

/// Fetches tracking reports from the QA dashboard.
pub struct HttpTrackingReportSource {
    client: Client,
    url_pattern: String,
}

impl HttpTrackingReportSource {
    /// Creates a source that fills `{letter}` in `url_pattern` per series.
    #[must_use]
    pub fn new(client: Client, url_pattern: impl Into<String>) -> Self {
        Self { client, url_pattern: url_pattern.into() }
    }

    /// Report URL for `series`, keyed by the first letter of its name.
    #[must_use]
    pub fn report_url(&self, series: &str) -> String {
        let letter = series.chars().next().map(|c| c.to_ascii_lowercase().to_string());
        self.url_pattern.replace("{letter}", letter.as_deref().unwrap_or_default())
    }

    async fn fetch(&self, url: String) -> Result<Value, PortError> {
        tracing::debug!(%url, "fetching tracking report");
        let report: Value = self.client.get(&url).send().await?.error_for_status()?.json().await?;
        Ok(report)
    }
}

impl TrackingReportSource for HttpTrackingReportSource {
    fn fetch_report(&self, series: &str) -> PortFuture<'_, Value> {
        Box::pin(self.fetch(self.report_url(series)))
    }
}
