//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

use serde_json::json;

use rls_bug_tracker::cassette::recorder::CassetteRecorder;

fn run_tracker(args: &[&str], replay: Option<&Path>) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_rls-bug-tracker");
    let mut command = Command::new(bin);
    command.args(args).env_remove("RLS_RECORD").env_remove("RLS_REPLAY");
    if let Some(path) = replay {
        command.env("RLS_REPLAY", path);
    }
    command.output().expect("failed to run rls-bug-tracker binary")
}

fn write_cassette(path: &Path) {
    let mut recorder = CassetteRecorder::new(path, "cli");
    recorder.record(
        "releases",
        "series",
        json!(null),
        json!({"Ok": [{
            "version": "24.04 LTS", "codename": "Noble Numbat", "series": "noble",
            "created": "2023-10-12", "release": "2024-04-25", "eol": "2029-05-31",
            "eol_server": null
        }]}),
    );
    recorder.record("clock", "now", json!(null), json!("2024-06-01T12:00:00Z"));
    recorder.record("archive", "pending_uploads", json!({"series": "noble"}), json!({"Ok": []}));
    recorder.record(
        "tracker",
        "fetch_report",
        json!({"series": "noble"}),
        json!({"Ok": {"tasks": {"2061413": [{
            "assignee": "Daniel van Vugt",
            "title": "Screen freezes after resume",
            "status": "Triaged",
            "web_link": "https://bugs.launchpad.net/ubuntu/+source/mutter/+bug/2061413",
            "date_created": "Thursday, 30. May 2024 09:15 UTC",
            "team": ["desktop-packages"]
        }]}}}),
    );
    recorder.finish().expect("cassette should be written");
}

#[test]
fn help_shows_usage() {
    let output = run_tracker(&["--help"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--release"));
    assert!(stdout.contains("TEAM"));
}

#[test]
fn missing_team_shows_error() {
    let output = run_tracker(&["-r", "noble"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("TEAM"));
}

#[test]
fn replayed_report_goes_to_stdout() {
    let dir = std::env::temp_dir().join("rls_cli_test_replay");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("noble.cassette.yaml");
    write_cassette(&path);

    let output = run_tracker(&["--release", "noble", "desktop-packages"], Some(&path));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.starts_with("# noble\n---\n\n"));
    assert!(stdout.contains("#### Daniel van Vugt (@vanvugt)\n"));
    assert!(stdout.contains(
        "[Screen freezes after resume](https://bugs.launchpad.net/ubuntu/+source/mutter/+bug/2061413)"
    ));
    assert!(stdout.contains("Triaged :sunglasses: Task created 2 days ago; 2024-05-30 09:15:00"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_release_exits_with_error() {
    let dir = std::env::temp_dir().join("rls_cli_test_unknown");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("noble.cassette.yaml");
    write_cassette(&path);

    let output = run_tracker(&["--release", "warty", "desktop-packages"], Some(&path));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("warty"));
    assert!(output.stdout.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
