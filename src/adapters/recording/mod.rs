//! Recording adapters that capture interactions to a cassette.

pub mod archive;
pub mod clock;
pub mod releases;
pub mod tracker;

use std::sync::{Arc, Mutex};

use serde::Serialize;

pub use archive::RecordingUploadArchive;
pub use clock::RecordingClock;
pub use releases::RecordingReleaseCatalog;
pub use tracker::RecordingTrackingReportSource;

use crate::cassette::recorder::CassetteRecorder;

/// Records an interaction with a plain (non-`Result`) return value.
///
/// Mirror of `replaying::next_output`.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    match (serde_json::to_value(input), serde_json::to_value(output)) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(port, method, error = %err, "interaction not recorded");
        }
    }
}

/// Records a `Result<T, E>` interaction as `{"Ok": v}` or `{"Err": msg}`.
///
/// Mirror of `replaying::replay_result`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(value) => serde_json::to_value(value).map(|inner| serde_json::json!({ "Ok": inner })),
        Err(err) => Ok(serde_json::json!({ "Err": err.to_string() })),
    };
    match (serde_json::to_value(input), output) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(port, method, error = %err, "interaction not recorded");
        }
    }
}

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(err) => tracing::warn!(port, method, error = %err, "recorder lock poisoned"),
    }
}
