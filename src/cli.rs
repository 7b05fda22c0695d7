//! CLI argument definitions.

use clap::{ArgAction, Parser};

use crate::adapters::live::distro_info::DEFAULT_DISTRO_INFO_CSV;
use crate::adapters::live::launchpad::DEFAULT_API_ROOT;
use crate::adapters::live::tracker::DEFAULT_TRACKER_URL;

/// Top-level CLI parser for `rls-bug-tracker`.
#[derive(Debug, Parser)]
#[command(
    name = "rls-bug-tracker",
    version,
    about = "Report open release-tracking bugs for one or more teams"
)]
pub struct Cli {
    /// Release series to report on (repeatable); `ALL` or none selects
    /// every supported series.
    #[arg(short, long = "release", value_name = "RELEASE", action = ArgAction::Append)]
    pub releases: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Tracking report URL; `{letter}` is replaced by the series' first letter.
    #[arg(long, env = "RLS_TRACKER_URL", default_value = DEFAULT_TRACKER_URL)]
    pub tracker_url: String,

    /// Launchpad web service root.
    #[arg(long, env = "LAUNCHPAD_API_ROOT", default_value = DEFAULT_API_ROOT)]
    pub launchpad_api: String,

    /// distro-info CSV table of Ubuntu releases.
    #[arg(long, env = "DISTRO_INFO_CSV", default_value = DEFAULT_DISTRO_INFO_CSV)]
    pub distro_info: String,

    /// Per-request HTTP timeout in seconds.
    #[arg(long, env = "RLS_HTTP_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,

    /// Teams whose bugs are reported.
    #[arg(required = true, value_name = "TEAM")]
    pub teams: Vec<String>,
}
