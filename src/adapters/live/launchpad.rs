//! Live adapter for the `UploadArchive` port using the Launchpad REST API.
//!
//! Access is anonymous and read-only. Collections are paged; every
//! `next_collection_link` is followed until exhausted.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::ports::{
    PendingUpload, PortError, PortFuture, PublicationQuery, SourcePublication, UploadArchive,
};

/// Default Launchpad web service root.
pub const DEFAULT_API_ROOT: &str = "https://api.launchpad.net/devel";

/// Distribution whose series are queried.
const DISTRIBUTION: &str = "ubuntu";

/// One page of a Launchpad collection.
#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    entries: Vec<T>,
    #[serde(default)]
    next_collection_link: Option<String>,
}

/// The subset of a `package_upload` entry the resolver needs.
#[derive(Debug, Deserialize)]
struct UploadEntry {
    #[serde(default)]
    display_name: Option<String>,
    package_name: String,
    package_version: String,
    #[serde(default)]
    distroseries_link: Option<String>,
    #[serde(default)]
    changes_file_url: Option<String>,
    #[serde(default)]
    copy_source_archive_link: Option<String>,
}

/// The subset of a `source_package_publishing_history` entry we use.
#[derive(Debug, Deserialize)]
struct PublicationEntry {
    self_link: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl UploadEntry {
    fn into_upload(self, series_link: &str) -> PendingUpload {
        let display_name = self
            .display_name
            .unwrap_or_else(|| format!("{} {}", self.package_name, self.package_version));
        PendingUpload {
            display_name,
            package_name: self.package_name,
            package_version: self.package_version,
            series: self.distroseries_link.unwrap_or_else(|| series_link.to_string()),
            changes_file_url: self.changes_file_url,
            copy_source_archive: self.copy_source_archive_link,
        }
    }
}

/// Upload archive backed by the Launchpad web service.
pub struct LaunchpadArchive {
    client: Client,
    api_root: String,
}

impl LaunchpadArchive {
    /// Creates an archive client rooted at `api_root`.
    #[must_use]
    pub fn new(client: Client, api_root: impl Into<String>) -> Self {
        Self { client, api_root: api_root.into().trim_end_matches('/').to_string() }
    }

    /// Link of `series` within the distribution.
    #[must_use]
    pub fn series_link(&self, series: &str) -> String {
        format!("{}/{DISTRIBUTION}/{series}", self.api_root)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, PortError> {
        tracing::trace!(%url, ?query, "launchpad request");
        let value =
            self.client.get(url).query(query).send().await?.error_for_status()?.json().await?;
        Ok(value)
    }

    /// Fetches every entry of a collection, following pagination.
    async fn collect_pages<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, PortError> {
        let mut page: Page<T> = self.get_json(url, query).await?;
        let mut entries = std::mem::take(&mut page.entries);
        while let Some(next) = page.next_collection_link.take() {
            page = self.get_json(&next, &[]).await?;
            entries.append(&mut page.entries);
        }
        Ok(entries)
    }

    async fn unapproved_uploads(&self, series: String) -> Result<Vec<PendingUpload>, PortError> {
        let series_link = self.series_link(&series);
        let entries: Vec<UploadEntry> = self
            .collect_pages(
                &series_link,
                &[("ws.op", "getPackageUploads"), ("status", "Unapproved")],
            )
            .await?;
        tracing::debug!(%series, count = entries.len(), "listed unapproved uploads");
        Ok(entries.into_iter().map(|entry| entry.into_upload(&series_link)).collect())
    }

    async fn find_publications(
        &self,
        query: PublicationQuery,
    ) -> Result<Vec<SourcePublication>, PortError> {
        let entries: Vec<PublicationEntry> = self
            .collect_pages(
                &query.archive,
                &[
                    ("ws.op", "getPublishedSources"),
                    ("distro_series", query.series.as_str()),
                    ("exact_match", "true"),
                    ("source_name", query.source_name.as_str()),
                    ("version", query.version.as_str()),
                    ("order_by_date", "true"),
                ],
            )
            .await?;
        Ok(entries
            .into_iter()
            .map(|entry| SourcePublication {
                display_name: entry.display_name.unwrap_or_else(|| entry.self_link.clone()),
                self_link: entry.self_link,
            })
            .collect())
    }

    async fn changes_file_url(&self, self_link: String) -> Result<Option<String>, PortError> {
        self.get_json(&self_link, &[("ws.op", "changesFileUrl")]).await
    }

    async fn download(&self, url: String) -> Result<String, PortError> {
        tracing::debug!(%url, "fetching changes file");
        let text = self.client.get(&url).send().await?.error_for_status()?.text().await?;
        Ok(text)
    }
}

impl UploadArchive for LaunchpadArchive {
    fn pending_uploads(&self, series: &str) -> PortFuture<'_, Vec<PendingUpload>> {
        Box::pin(self.unapproved_uploads(series.to_string()))
    }

    fn published_sources(
        &self,
        query: &PublicationQuery,
    ) -> PortFuture<'_, Vec<SourcePublication>> {
        Box::pin(self.find_publications(query.clone()))
    }

    fn publication_changes_file(
        &self,
        publication: &SourcePublication,
    ) -> PortFuture<'_, Option<String>> {
        Box::pin(self.changes_file_url(publication.self_link.clone()))
    }

    fn fetch_changes(&self, url: &str) -> PortFuture<'_, String> {
        Box::pin(self.download(url.to_string()))
    }
}
