//! Binary entrypoint for the `rls-bug-tracker` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is fine; flags and defaults still apply.
    dotenvy::dotenv().ok();

    // Recording and replay are handled in commands::dispatch via RLS_RECORD / RLS_REPLAY.
    match rls_bug_tracker::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
