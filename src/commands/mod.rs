//! Command dispatch and handlers.

pub mod report;

use std::env;
use std::io;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;

use report::ReportRequest;

/// Runs the report described by `cli`.
///
/// When `RLS_REPLAY` names a cassette, every port is served from it.
/// Otherwise, when `RLS_RECORD` names a file, the live run is recorded
/// there.
///
/// # Errors
///
/// Returns an error string if the context cannot be built or the report
/// fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::from(cli);
    let ctx = if let Ok(path) = env::var("RLS_REPLAY") {
        ServiceContext::replaying(&PathBuf::from(path))?
    } else if let Ok(path) = env::var("RLS_RECORD") {
        ServiceContext::recording(&config, &PathBuf::from(path))?
    } else {
        ServiceContext::live(&config)?
    };

    let request = ReportRequest::new(cli.releases.clone(), cli.teams.iter().cloned());
    let result = report::run_with_context(&ctx, &request, &mut io::stdout().lock());

    // A failed report still leaves a cassette to replay it from.
    if let Some(path) = ctx.finish_recording()? {
        eprintln!("Recording saved to: {}", path.display());
    }

    result
}
