//! Replaying adapter for the Clock port.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Replays recorded clock readings.
///
/// Once the recorded readings run out, the last one is repeated; before
/// any reading, the cassette's recording time stands in.
pub struct ReplayingClock {
    replayer: Arc<Mutex<CassetteReplayer>>,
    last: Mutex<DateTime<Utc>>,
}

impl ReplayingClock {
    /// Creates a replaying clock starting from `recorded_at`.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>, recorded_at: DateTime<Utc>) -> Self {
        Self { replayer, last: Mutex::new(recorded_at) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        match next_output(&self.replayer, "clock", "now")
            .and_then(|output| Ok(serde_json::from_value::<DateTime<Utc>>(output)?))
        {
            Ok(now) => *last = now,
            Err(err) => tracing::debug!(error = %err, "no recorded clock reading; repeating last"),
        }
        *last
    }
}
