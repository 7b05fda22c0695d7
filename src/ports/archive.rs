//! Upload archive port (Launchpad package uploads and publications).

use serde::{Deserialize, Serialize};

use super::PortFuture;

/// An upload sitting in a release's review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUpload {
    /// Human-readable label used in logs.
    pub display_name: String,
    /// Source package name.
    pub package_name: String,
    /// Source package version.
    pub package_version: String,
    /// Series the upload targets, as the archive identifies it.
    pub series: String,
    /// The upload's own changes file, absent for copies and syncs.
    pub changes_file_url: Option<String>,
    /// Archive a copy or sync was taken from.
    pub copy_source_archive: Option<String>,
}

/// Exact-match lookup of a published source, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationQuery {
    /// Archive to search.
    pub archive: String,
    /// Series the publication must belong to.
    pub series: String,
    /// Exact source package name.
    pub source_name: String,
    /// Exact source package version.
    pub version: String,
}

/// A source package publication record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePublication {
    /// Link identifying the publication in the archive.
    pub self_link: String,
    /// Publication label used in logs.
    pub display_name: String,
}

/// Read-only access to the package archive.
pub trait UploadArchive: Send + Sync {
    /// Lists the unapproved uploads for `series`.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload queue cannot be listed.
    fn pending_uploads(&self, series: &str) -> PortFuture<'_, Vec<PendingUpload>>;

    /// Finds publications matching `query`, most recently published first.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails. No match is an empty list.
    fn published_sources(&self, query: &PublicationQuery)
        -> PortFuture<'_, Vec<SourcePublication>>;

    /// Returns the changes-file URL of a publication, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn publication_changes_file(
        &self,
        publication: &SourcePublication,
    ) -> PortFuture<'_, Option<String>>;

    /// Downloads the text of a changes file.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails.
    fn fetch_changes(&self, url: &str) -> PortFuture<'_, String>;
}
