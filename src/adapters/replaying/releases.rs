//! Replaying adapter for the `ReleaseCatalog` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{PortError, ReleaseCatalog, SeriesInfo};

/// Serves a recorded release catalog.
pub struct ReplayingReleaseCatalog {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingReleaseCatalog {
    /// Creates a catalog backed by `replayer`.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ReleaseCatalog for ReplayingReleaseCatalog {
    fn series(&self) -> Result<Vec<SeriesInfo>, PortError> {
        next_output(&self.replayer, "releases", "series").and_then(replay_result)
    }
}
