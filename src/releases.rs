//! Choosing which release series to report on.

use chrono::NaiveDate;

use crate::error::ReportError;
use crate::ports::SeriesInfo;

/// Keyword selecting every supported series.
pub const ALL_RELEASES: &str = "ALL";

/// First release date whose tracking report uses the doubled-letter name.
#[must_use]
pub fn tracking_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 4, 21).unwrap_or(NaiveDate::MIN)
}

/// Series that are open for development or still in support on `today`
/// and were released on or after `cutoff`, in catalog order.
#[must_use]
pub fn supported_series(catalog: &[SeriesInfo], today: NaiveDate, cutoff: NaiveDate) -> Vec<String> {
    catalog
        .iter()
        .filter(|info| info.created <= today)
        .filter(|info| {
            let in_support = |end: Option<NaiveDate>| end.is_some_and(|end| today <= end);
            in_support(info.eol) || in_support(info.eol_server)
        })
        .filter(|info| info.release.is_some_and(|release| release >= cutoff))
        .map(|info| info.series.clone())
        .collect()
}

/// Resolves the `--release` arguments against the supported series.
///
/// No arguments, or any argument equal to [`ALL_RELEASES`], selects
/// every supported series. Duplicates are dropped, keeping first order.
///
/// # Errors
///
/// Returns [`ReportError::UnknownRelease`] for a series that is not
/// supported.
pub fn select_releases(requested: &[String], supported: &[String]) -> Result<Vec<String>, ReportError> {
    if requested.is_empty() || requested.iter().any(|r| r == ALL_RELEASES) {
        return Ok(supported.to_vec());
    }
    let mut selected: Vec<String> = Vec::new();
    for release in requested {
        if !supported.contains(release) {
            return Err(ReportError::UnknownRelease {
                requested: release.clone(),
                supported: supported.join(", "),
            });
        }
        if !selected.contains(release) {
            selected.push(release.clone());
        }
    }
    Ok(selected)
}
