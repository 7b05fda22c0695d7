//! Recording adapter for the `UploadArchive` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{
    PendingUpload, PortFuture, PublicationQuery, SourcePublication, UploadArchive,
};

/// Records archive lookups while delegating to an inner archive.
pub struct RecordingUploadArchive {
    inner: Box<dyn UploadArchive>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingUploadArchive {
    /// Wraps `inner`, recording every call into `recorder`.
    pub fn new(inner: Box<dyn UploadArchive>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct SeriesInput<'a> {
    series: &'a str,
}

#[derive(Serialize)]
struct UrlInput<'a> {
    url: &'a str,
}

impl UploadArchive for RecordingUploadArchive {
    fn pending_uploads(&self, series: &str) -> PortFuture<'_, Vec<PendingUpload>> {
        let series = series.to_string();
        Box::pin(async move {
            let result = self.inner.pending_uploads(&series).await;
            let input = SeriesInput { series: &series };
            record_result(&self.recorder, "archive", "pending_uploads", &input, &result);
            result
        })
    }

    fn published_sources(
        &self,
        query: &PublicationQuery,
    ) -> PortFuture<'_, Vec<SourcePublication>> {
        let query = query.clone();
        Box::pin(async move {
            let result = self.inner.published_sources(&query).await;
            record_result(&self.recorder, "archive", "published_sources", &query, &result);
            result
        })
    }

    fn publication_changes_file(
        &self,
        publication: &SourcePublication,
    ) -> PortFuture<'_, Option<String>> {
        let publication = publication.clone();
        Box::pin(async move {
            let result = self.inner.publication_changes_file(&publication).await;
            record_result(
                &self.recorder,
                "archive",
                "publication_changes_file",
                &publication,
                &result,
            );
            result
        })
    }

    fn fetch_changes(&self, url: &str) -> PortFuture<'_, String> {
        let url = url.to_string();
        Box::pin(async move {
            let result = self.inner.fetch_changes(&url).await;
            let input = UrlInput { url: &url };
            record_result(&self.recorder, "archive", "fetch_changes", &input, &result);
            result
        })
    }
}
