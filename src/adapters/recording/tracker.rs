//! Recording adapter for the `TrackingReportSource` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{PortFuture, TrackingReportSource};

/// Records fetched reports while delegating to an inner source.
pub struct RecordingTrackingReportSource {
    inner: Box<dyn TrackingReportSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingTrackingReportSource {
    /// Wraps `inner`, recording every fetch into `recorder`.
    pub fn new(
        inner: Box<dyn TrackingReportSource>,
        recorder: Arc<Mutex<CassetteRecorder>>,
    ) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct FetchReportInput<'a> {
    series: &'a str,
}

impl TrackingReportSource for RecordingTrackingReportSource {
    fn fetch_report(&self, series: &str) -> PortFuture<'_, Value> {
        let series = series.to_string();
        Box::pin(async move {
            let result = self.inner.fetch_report(&series).await;
            let input = FetchReportInput { series: &series };
            record_result(&self.recorder, "tracker", "fetch_report", &input, &result);
            result
        })
    }
}
