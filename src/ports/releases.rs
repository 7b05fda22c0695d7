//! Release catalog port.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PortError;

/// One row of the distro-info release table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInfo {
    /// Version string, e.g. `"24.04 LTS"`.
    pub version: String,
    /// Full codename, e.g. `"Noble Numbat"`.
    pub codename: String,
    /// Series name, e.g. `"noble"`.
    pub series: String,
    /// Date the series was opened for development.
    pub created: NaiveDate,
    /// Planned or actual release date.
    pub release: Option<NaiveDate>,
    /// End of standard support.
    pub eol: Option<NaiveDate>,
    /// End of server support, for LTS releases that have one.
    pub eol_server: Option<NaiveDate>,
    /// End of Expanded Security Maintenance, for releases covered by it.
    #[serde(default)]
    pub eol_esm: Option<NaiveDate>,
}

/// Lists every known release series.
pub trait ReleaseCatalog: Send + Sync {
    /// Returns all series in catalog order (oldest first).
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    fn series(&self) -> Result<Vec<SeriesInfo>, PortError>;
}
