//! Maps pending uploads to the bugs their changelogs claim to fix.

use std::collections::HashSet;

use super::changes::ChangesFile;
use crate::error::ResolveError;
use crate::ports::{PendingUpload, PublicationQuery, UploadArchive};

/// Bug numbers referenced by the uploads of one release's queue.
pub type UploadBugSet = HashSet<String>;

/// Resolves uploads to bug numbers through the archive port.
pub struct UploadBugResolver<'a> {
    archive: &'a dyn UploadArchive,
}

impl<'a> UploadBugResolver<'a> {
    /// Creates a resolver backed by `archive`.
    #[must_use]
    pub fn new(archive: &'a dyn UploadArchive) -> Self {
        Self { archive }
    }

    /// Collects every bug referenced by `uploads`.
    ///
    /// Best effort: an upload whose changes file cannot be fetched or
    /// parsed is logged and contributes nothing.
    pub async fn resolve(&self, uploads: &[PendingUpload]) -> UploadBugSet {
        let mut bugs = UploadBugSet::new();
        for upload in uploads {
            match self.bugs_for(upload).await {
                Ok(found) => {
                    if !found.is_empty() {
                        tracing::debug!(upload = %upload.display_name, bugs = ?found, "upload fixes bugs");
                    }
                    bugs.extend(found);
                }
                Err(err) => {
                    tracing::warn!(upload = %upload.display_name, error = %err, "skipping upload");
                }
            }
        }
        bugs
    }

    /// Bugs referenced by a single upload.
    ///
    /// Uploads with their own changes file are read directly. Copies and
    /// syncs have none, so the newest matching publication in the source
    /// archive is used instead. No such publication means no bugs.
    ///
    /// # Errors
    ///
    /// Returns an error if a lookup or download fails, or the changes
    /// file is malformed.
    pub async fn bugs_for(&self, upload: &PendingUpload) -> Result<Vec<String>, ResolveError> {
        let own = upload.changes_file_url.as_deref().filter(|url| !url.is_empty());
        let changes_url = match own {
            Some(url) => Some(url.to_string()),
            None => self.origin_changes_file(upload).await?,
        };
        match changes_url {
            Some(url) => self.bugs_in(&url).await,
            None => Ok(Vec::new()),
        }
    }

    async fn origin_changes_file(
        &self,
        upload: &PendingUpload,
    ) -> Result<Option<String>, ResolveError> {
        let Some(archive) = upload.copy_source_archive.as_ref() else {
            tracing::debug!(upload = %upload.display_name, "no changes file and no copy source");
            return Ok(None);
        };
        let query = PublicationQuery {
            archive: archive.clone(),
            series: upload.series.clone(),
            source_name: upload.package_name.clone(),
            version: upload.package_version.clone(),
        };
        let publications = self
            .archive
            .published_sources(&query)
            .await
            .map_err(|source| ResolveError::Fetch { what: "source publications", source })?;
        let Some(latest) = publications.first() else {
            tracing::debug!(upload = %upload.display_name, "no originating publication");
            return Ok(None);
        };
        let url = self
            .archive
            .publication_changes_file(latest)
            .await
            .map_err(|source| ResolveError::Fetch { what: "publication changes file", source })?;
        Ok(url.filter(|url| !url.is_empty()))
    }

    async fn bugs_in(&self, url: &str) -> Result<Vec<String>, ResolveError> {
        let text = self
            .archive
            .fetch_changes(url)
            .await
            .map_err(|source| ResolveError::Fetch { what: "changes file", source })?;
        let changes: ChangesFile = text.parse()?;
        Ok(changes.bugs_fixed())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ports::{PortFuture, SourcePublication};

    /// In-memory archive keyed by URL, publication source name, and link.
    #[derive(Default)]
    struct MemArchive {
        changes: HashMap<String, Result<String, String>>,
        publications: HashMap<String, Vec<SourcePublication>>,
        publication_changes: HashMap<String, Option<String>>,
    }

    impl UploadArchive for MemArchive {
        fn pending_uploads(&self, _series: &str) -> PortFuture<'_, Vec<PendingUpload>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn published_sources(
            &self,
            query: &PublicationQuery,
        ) -> PortFuture<'_, Vec<SourcePublication>> {
            let found = self.publications.get(&query.source_name).cloned().unwrap_or_default();
            Box::pin(async move { Ok(found) })
        }

        fn publication_changes_file(
            &self,
            publication: &SourcePublication,
        ) -> PortFuture<'_, Option<String>> {
            let found = self.publication_changes.get(&publication.self_link).cloned().flatten();
            Box::pin(async move { Ok(found) })
        }

        fn fetch_changes(&self, url: &str) -> PortFuture<'_, String> {
            let found = self.changes.get(url).cloned();
            Box::pin(async move {
                match found {
                    Some(Ok(text)) => Ok(text),
                    Some(Err(msg)) => Err(msg.into()),
                    None => Err("404 Not Found".into()),
                }
            })
        }
    }

    fn upload(name: &str, changes: Option<&str>, copy_source: Option<&str>) -> PendingUpload {
        PendingUpload {
            display_name: name.to_string(),
            package_name: name.to_string(),
            package_version: "1.0-1".to_string(),
            series: "https://api.launchpad.net/devel/ubuntu/noble".to_string(),
            changes_file_url: changes.map(String::from),
            copy_source_archive: copy_source.map(String::from),
        }
    }

    fn publication(link: &str) -> SourcePublication {
        SourcePublication { self_link: link.to_string(), display_name: link.to_string() }
    }

    #[tokio::test]
    async fn reads_bugs_from_own_changes_file() {
        let mut archive = MemArchive::default();
        archive
            .changes
            .insert("u1".into(), Ok("Source: a\nLaunchpad-Bugs-Fixed: 10 11\n".into()));
        let resolver = UploadBugResolver::new(&archive);

        let bugs = resolver.resolve(&[upload("a", Some("u1"), None)]).await;

        assert_eq!(bugs, UploadBugSet::from(["10".to_string(), "11".to_string()]));
    }

    #[tokio::test]
    async fn sync_uses_newest_publication() {
        let mut archive = MemArchive::default();
        archive.publications.insert("b".into(), vec![publication("pub-new"), publication("pub-old")]);
        archive.publication_changes.insert("pub-new".into(), Some("u-new".into()));
        archive.publication_changes.insert("pub-old".into(), Some("u-old".into()));
        archive.changes.insert("u-new".into(), Ok("Launchpad-Bugs-Fixed: 20\n".into()));
        archive.changes.insert("u-old".into(), Ok("Launchpad-Bugs-Fixed: 19\n".into()));
        let resolver = UploadBugResolver::new(&archive);

        let bugs = resolver.resolve(&[upload("b", None, Some("debian"))]).await;

        assert_eq!(bugs, UploadBugSet::from(["20".to_string()]));
    }

    #[tokio::test]
    async fn sync_without_publication_contributes_nothing() {
        let archive = MemArchive::default();
        let resolver = UploadBugResolver::new(&archive);

        let found = resolver.bugs_for(&upload("c", None, Some("debian"))).await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn publication_without_changes_file_contributes_nothing() {
        let mut archive = MemArchive::default();
        archive.publications.insert("d".into(), vec![publication("pub-d")]);
        archive.publication_changes.insert("pub-d".into(), None);
        let resolver = UploadBugResolver::new(&archive);

        let found = resolver.bugs_for(&upload("d", None, Some("debian"))).await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn upload_without_any_provenance_contributes_nothing() {
        let archive = MemArchive::default();
        let resolver = UploadBugResolver::new(&archive);

        let found = resolver.bugs_for(&upload("e", None, None)).await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn failed_upload_does_not_stop_the_rest() {
        let mut archive = MemArchive::default();
        archive.changes.insert("broken".into(), Err("connection reset".into()));
        archive.changes.insert("garbled".into(), Ok("no colon here\n".into()));
        archive.changes.insert("good".into(), Ok("Launchpad-Bugs-Fixed: 30\n".into()));
        let resolver = UploadBugResolver::new(&archive);

        let bugs = resolver
            .resolve(&[
                upload("f", Some("broken"), None),
                upload("g", Some("garbled"), None),
                upload("h", Some("good"), None),
            ])
            .await;

        assert_eq!(bugs, UploadBugSet::from(["30".to_string()]));
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_per_upload() {
        let archive = MemArchive::default();
        let resolver = UploadBugResolver::new(&archive);

        let err = resolver.bugs_for(&upload("i", Some("missing"), None)).await.unwrap_err();

        assert!(matches!(err, ResolveError::Fetch { what: "changes file", .. }));
    }

    #[tokio::test]
    async fn duplicate_bugs_collapse() {
        let mut archive = MemArchive::default();
        archive.changes.insert("u1".into(), Ok("Launchpad-Bugs-Fixed: 7 8\n".into()));
        archive.changes.insert("u2".into(), Ok("Launchpad-Bugs-Fixed: 8\n".into()));
        let resolver = UploadBugResolver::new(&archive);

        let bugs =
            resolver.resolve(&[upload("j", Some("u1"), None), upload("k", Some("u2"), None)]).await;

        assert_eq!(bugs.len(), 2);
    }
}
