//! The report command: one Discourse-ready post covering every selected release.

use std::collections::BTreeSet;
use std::io::Write;

use crate::context::ServiceContext;
use crate::error::ReportError;
use crate::releases::{select_releases, supported_series, tracking_cutoff};
use crate::report::{emit, EmittedLedger, ReleaseHeading};
use crate::tracking::{tracked_tasks, TrackedBugIndex};
use crate::uploads::UploadBugResolver;

/// What to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Requested series; empty or `ALL` means every supported one.
    pub releases: Vec<String>,
    /// Teams whose tasks are included.
    pub teams: BTreeSet<String>,
}

impl ReportRequest {
    /// Builds a request from raw CLI values.
    #[must_use]
    pub fn new(releases: Vec<String>, teams: impl IntoIterator<Item = String>) -> Self {
        Self { releases, teams: teams.into_iter().collect() }
    }
}

/// Writes the report for `request` to `out`.
///
/// Each release is processed independently; a release that fails is
/// logged and skipped, and the run fails at the end naming it.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, a release is
/// unknown, output cannot be written, or any release failed.
pub fn run_with_context(
    ctx: &ServiceContext,
    request: &ReportRequest,
    out: &mut impl Write,
) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let releases = selected_releases(ctx, request).map_err(|e| e.to_string())?;
    tracing::info!(releases = ?releases, teams = ?request.teams, "starting report");

    let mut ledger = EmittedLedger::new();
    let mut failed = Vec::new();
    for release in &releases {
        write!(out, "{}", ReleaseHeading(release)).map_err(|e| e.to_string())?;
        let result = runtime.block_on(report_release(ctx, release, &request.teams, &mut ledger, out));
        match result {
            Ok(()) => {}
            Err(ReportError::Output(err)) => return Err(format!("Failed to write report: {err}")),
            Err(err) => {
                tracing::error!(%release, error = %err, "release failed");
                failed.push(release.as_str());
            }
        }
    }
    out.flush().map_err(|e| e.to_string())?;
    tracing::info!(bugs = ledger.len(), "report complete");

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("report incomplete; failed releases: {}", failed.join(", ")))
    }
}

fn selected_releases(
    ctx: &ServiceContext,
    request: &ReportRequest,
) -> Result<Vec<String>, ReportError> {
    let catalog = ctx.releases.series().map_err(ReportError::Catalog)?;
    let today = ctx.clock.now().date_naive();
    let supported = supported_series(&catalog, today, tracking_cutoff());
    tracing::debug!(supported = ?supported, "supported series");
    select_releases(&request.releases, &supported)
}

async fn report_release(
    ctx: &ServiceContext,
    release: &str,
    teams: &BTreeSet<String>,
    ledger: &mut EmittedLedger,
    out: &mut impl Write,
) -> Result<(), ReportError> {
    let uploads = ctx.archive.pending_uploads(release).await.map_err(|source| {
        ReportError::Fetch { release: release.to_string(), what: "upload queue", source }
    })?;
    tracing::info!(%release, uploads = uploads.len(), "listed pending uploads");
    let queued = UploadBugResolver::new(ctx.archive.as_ref()).resolve(&uploads).await;
    tracing::debug!(%release, bugs = queued.len(), "bugs fixed in the queue");

    let document = ctx.tracker.fetch_report(release).await.map_err(|source| {
        ReportError::Fetch { release: release.to_string(), what: "tracking report", source }
    })?;
    let index = TrackedBugIndex::build(tracked_tasks(&document, release)?, release, teams, &queued)?;
    tracing::info!(%release, tasks = index.task_count(), "indexed open tasks");

    let now = ctx.clock.now();
    for block in emit(&index, ledger, now) {
        write!(out, "{block}")?;
    }
    Ok(())
}
