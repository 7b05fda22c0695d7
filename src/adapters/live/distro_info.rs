//! Live adapter for the `ReleaseCatalog` port reading distro-info data.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::ports::{PortError, ReleaseCatalog, SeriesInfo};

/// Default location of the Ubuntu release table.
pub const DEFAULT_DISTRO_INFO_CSV: &str = "/usr/share/distro-info/ubuntu.csv";

/// Release catalog read from a distro-info CSV file.
pub struct DistroInfoCatalog {
    path: PathBuf,
}

impl DistroInfoCatalog {
    /// Creates a catalog reading `path` on every call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReleaseCatalog for DistroInfoCatalog {
    fn series(&self) -> Result<Vec<SeriesInfo>, PortError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read {}: {e}", self.path.display()))?;
        parse_catalog(&text)
    }
}

/// Parses a distro-info CSV table.
///
/// Columns are located by header name; empty date cells become `None`.
///
/// # Errors
///
/// Returns an error when a required column is missing, a row is short,
/// or a date is not `YYYY-MM-DD`.
pub fn parse_catalog(text: &str) -> Result<Vec<SeriesInfo>, PortError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header: Vec<&str> =
        lines.next().ok_or("distro-info table is empty")?.split(',').map(str::trim).collect();
    let column = |name: &str| {
        header
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| format!("distro-info table has no {name:?} column"))
    };
    let version = column("version")?;
    let codename = column("codename")?;
    let series = column("series")?;
    let created = column("created")?;
    let release = column("release")?;
    let eol = column("eol")?;
    let eol_server = column("eol-server").ok();
    let eol_esm = column("eol-esm").ok();

    let mut rows = Vec::new();
    for (number, line) in lines.enumerate() {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        let cell = |index: usize| {
            cells.get(index).copied().ok_or_else(|| format!("row {} is too short", number + 2))
        };
        let date = |index: usize| -> Result<Option<NaiveDate>, PortError> {
            let value = cells.get(index).copied().unwrap_or_default();
            if value.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(|e| format!("row {}: bad date {value:?}: {e}", number + 2).into())
        };

        rows.push(SeriesInfo {
            version: cell(version)?.to_string(),
            codename: cell(codename)?.to_string(),
            series: cell(series)?.to_string(),
            created: date(created)?
                .ok_or_else(|| format!("row {} has no creation date", number + 2))?,
            release: date(release)?,
            eol: date(eol)?,
            eol_server: match eol_server {
                Some(index) => date(index)?,
                None => None,
            },
            eol_esm: match eol_esm {
                Some(index) => date(index)?,
                None => None,
            },
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
version,codename,series,created,release,eol,eol-server,eol-esm
18.04 LTS,Bionic Beaver,bionic,2017-10-19,2018-04-26,2023-05-31,2023-05-31,2028-04-26
24.10,Oracular Oriole,oracular,2024-04-25,2024-10-10,2025-07-10
";

    #[test]
    fn parses_rows() {
        let rows = parse_catalog(TABLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].series, "bionic");
        assert_eq!(rows[0].version, "18.04 LTS");
        assert_eq!(rows[0].eol_server, NaiveDate::from_ymd_opt(2023, 5, 31));
        assert_eq!(rows[1].codename, "Oracular Oriole");
        assert_eq!(rows[1].eol_server, None);
        assert_eq!(rows[0].eol_esm, NaiveDate::from_ymd_opt(2028, 4, 26));
        assert_eq!(rows[1].eol_esm, None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse_catalog("version,codename\n1,a\n").unwrap_err();
        assert!(err.to_string().contains("series"));
    }

    #[test]
    fn bad_date_is_an_error() {
        let err =
            parse_catalog("version,codename,series,created,release,eol\n1,A,a,2020,2021-01-01,\n")
                .unwrap_err();
        assert!(err.to_string().contains("bad date"));
    }

    #[test]
    fn reading_missing_file_fails() {
        let catalog = DistroInfoCatalog::new("/nonexistent/distro-info/ubuntu.csv");
        assert!(catalog.series().is_err());
    }
}
