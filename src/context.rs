//! Service context bundling all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::distro_info::DistroInfoCatalog;
use crate::adapters::live::http_client;
use crate::adapters::live::launchpad::LaunchpadArchive;
use crate::adapters::live::tracker::HttpTrackingReportSource;
use crate::adapters::recording::{
    RecordingClock, RecordingReleaseCatalog, RecordingTrackingReportSource,
    RecordingUploadArchive,
};
use crate::adapters::replaying::{
    ReplayingClock, ReplayingReleaseCatalog, ReplayingTrackingReportSource,
    ReplayingUploadArchive,
};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Config;
use crate::ports::{Clock, ReleaseCatalog, TrackingReportSource, UploadArchive};

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up live, recording, or replaying adapters.
pub struct ServiceContext {
    /// Clock used to age tasks.
    pub clock: Box<dyn Clock>,
    /// Source of per-release tracking reports.
    pub tracker: Box<dyn TrackingReportSource>,
    /// Launchpad upload queue and publications.
    pub archive: Box<dyn UploadArchive>,
    /// Ubuntu release catalog.
    pub releases: Box<dyn ReleaseCatalog>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context talking to the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn live(config: &Config) -> Result<Self, String> {
        let client =
            http_client(config.timeout).map_err(|e| format!("Failed to build HTTP client: {e}"))?;
        Ok(Self {
            clock: Box::new(LiveClock),
            tracker: Box::new(HttpTrackingReportSource::new(
                client.clone(),
                config.tracker_url_pattern.clone(),
            )),
            archive: Box::new(LaunchpadArchive::new(client, config.launchpad_api_root.clone())),
            releases: Box::new(DistroInfoCatalog::new(config.distro_info_path.clone())),
            recorder: None,
        })
    }

    /// Creates a live context that records every interaction to `path`.
    ///
    /// The cassette is written by [`ServiceContext::finish_recording`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn recording(config: &Config, path: &Path) -> Result<Self, String> {
        let live = Self::live(config)?;
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "rls-bug-tracker")));
        Ok(Self {
            clock: Box::new(RecordingClock::new(live.clock, Arc::clone(&recorder))),
            tracker: Box::new(RecordingTrackingReportSource::new(
                live.tracker,
                Arc::clone(&recorder),
            )),
            archive: Box::new(RecordingUploadArchive::new(live.archive, Arc::clone(&recorder))),
            releases: Box::new(RecordingReleaseCatalog::new(
                live.releases,
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        })
    }

    /// Creates a context served entirely from the cassette at `path`.
    ///
    /// All ports share one replayer; each port/method pair has its own
    /// cursor, so calls replay in the order they were recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let replayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));
        Ok(Self {
            clock: Box::new(ReplayingClock::new(Arc::clone(&replayer), cassette.recorded_at)),
            tracker: Box::new(ReplayingTrackingReportSource::new(Arc::clone(&replayer))),
            archive: Box::new(ReplayingUploadArchive::new(Arc::clone(&replayer))),
            releases: Box::new(ReplayingReleaseCatalog::new(replayer)),
            recorder: None,
        })
    }

    /// Writes the cassette of a recording context.
    ///
    /// Returns the cassette path, or `None` when nothing was recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish_recording(self) -> Result<Option<PathBuf>, String> {
        let Some(recorder) = self.recorder else {
            return Ok(None);
        };
        // The adapters hold the other references.
        drop((self.clock, self.tracker, self.archive, self.releases));
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "cassette recorder is still in use".to_string())?
            .into_inner()
            .map_err(|e| format!("cassette recorder lock poisoned: {e}"))?;
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}
