//! Runtime configuration resolved from the command line and environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Where the live adapters reach their collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracking report URL pattern containing `{letter}`.
    pub tracker_url_pattern: String,
    /// Launchpad web service root.
    pub launchpad_api_root: String,
    /// distro-info CSV path.
    pub distro_info_path: PathBuf,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            tracker_url_pattern: cli.tracker_url.clone(),
            launchpad_api_root: cli.launchpad_api.clone(),
            distro_info_path: PathBuf::from(&cli.distro_info),
            timeout: Duration::from_secs(cli.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn overrides_flow_into_config() {
        let cli = Cli::parse_from([
            "rls-bug-tracker",
            "--launchpad-api",
            "http://localhost:8080/devel",
            "--distro-info",
            "/tmp/ubuntu.csv",
            "--timeout",
            "5",
            "desktop-packages",
        ]);
        let config = Config::from(&cli);
        assert_eq!(config.launchpad_api_root, "http://localhost:8080/devel");
        assert_eq!(config.distro_info_path, PathBuf::from("/tmp/ubuntu.csv"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
