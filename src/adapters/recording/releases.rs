//! Recording adapter for the `ReleaseCatalog` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{PortError, ReleaseCatalog, SeriesInfo};

/// Records the catalog while delegating to an inner one.
pub struct RecordingReleaseCatalog {
    inner: Box<dyn ReleaseCatalog>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingReleaseCatalog {
    /// Wraps `inner`, recording every listing into `recorder`.
    pub fn new(inner: Box<dyn ReleaseCatalog>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ReleaseCatalog for RecordingReleaseCatalog {
    fn series(&self) -> Result<Vec<SeriesInfo>, PortError> {
        let result = self.inner.series();
        record_result(&self.recorder, "releases", "series", &(), &result);
        result
    }
}
