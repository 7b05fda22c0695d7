//! Replaying adapter for the `UploadArchive` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{
    PendingUpload, PortFuture, PublicationQuery, SourcePublication, UploadArchive,
};

/// Serves recorded archive lookups and changes files.
pub struct ReplayingUploadArchive {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingUploadArchive {
    /// Creates an archive backed by `replayer`.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl UploadArchive for ReplayingUploadArchive {
    fn pending_uploads(&self, _series: &str) -> PortFuture<'_, Vec<PendingUpload>> {
        let result =
            next_output(&self.replayer, "archive", "pending_uploads").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn published_sources(
        &self,
        _query: &PublicationQuery,
    ) -> PortFuture<'_, Vec<SourcePublication>> {
        let result =
            next_output(&self.replayer, "archive", "published_sources").and_then(replay_result);
        Box::pin(async move { result })
    }

    fn publication_changes_file(
        &self,
        _publication: &SourcePublication,
    ) -> PortFuture<'_, Option<String>> {
        let result = next_output(&self.replayer, "archive", "publication_changes_file")
            .and_then(replay_result);
        Box::pin(async move { result })
    }

    fn fetch_changes(&self, _url: &str) -> PortFuture<'_, String> {
        let result = next_output(&self.replayer, "archive", "fetch_changes").and_then(replay_result);
        Box::pin(async move { result })
    }
}
