//! Tracking dashboard port.

use serde_json::Value;

use super::PortFuture;

/// Fetches the per-release tracking report published by the QA dashboard.
pub trait TrackingReportSource: Send + Sync {
    /// Returns the whole tracking document for `series`.
    ///
    /// The document is returned untyped; structural validation happens
    /// when the index is built so that a malformed report is reported
    /// against the release it belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be fetched or is not JSON.
    fn fetch_report(&self, series: &str) -> PortFuture<'_, Value>;
}
