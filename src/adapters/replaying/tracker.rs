//! Replaying adapter for the `TrackingReportSource` port.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{PortFuture, TrackingReportSource};

/// Serves recorded tracking reports.
pub struct ReplayingTrackingReportSource {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingTrackingReportSource {
    /// Creates a source backed by `replayer`.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl TrackingReportSource for ReplayingTrackingReportSource {
    fn fetch_report(&self, _series: &str) -> PortFuture<'_, Value> {
        let result = next_output(&self.replayer, "tracker", "fetch_report").and_then(replay_result);
        Box::pin(async move { result })
    }
}
