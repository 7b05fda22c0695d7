//! Replaying adapters that serve recorded interactions.

pub mod archive;
pub mod clock;
pub mod releases;
pub mod tracker;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use archive::ReplayingUploadArchive;
pub use clock::ReplayingClock;
pub use releases::ReplayingReleaseCatalog;
pub use tracker::ReplayingTrackingReportSource;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

/// Takes the next recorded output for `port`/`method`.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<Value, PortError> {
    let mut guard = replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
    let interaction = guard.next_interaction(port, method)?;
    Ok(interaction.output.clone())
}

/// Decodes a recorded `{"Ok": v}` / `{"Err": msg}` output.
pub(crate) fn replay_result<T: DeserializeOwned>(output: Value) -> Result<T, PortError> {
    match output {
        Value::Object(mut map) if map.contains_key("Ok") => {
            let inner = map.remove("Ok").unwrap_or(Value::Null);
            Ok(serde_json::from_value(inner)?)
        }
        Value::Object(map) if map.contains_key("Err") => {
            let message = match map.get("Err") {
                Some(Value::String(message)) => message.clone(),
                other => format!("{other:?}"),
            };
            Err(message.into())
        }
        other => Err(format!("recorded output is neither Ok nor Err: {other}").into()),
    }
}
