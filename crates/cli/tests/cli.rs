use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const CONFIGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs");

fn station() -> Command {
    let mut cmd = Command::cargo_bin("station").expect("station bin");
    cmd.args(["--config-dir", CONFIGS]);
    cmd
}

#[test]
fn status_shows_default_vessel() {
    station()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Comsat I around Kerbin ==="))
        .stdout(predicate::str::contains("2.85 Mm"))
        .stdout(predicate::str::contains("(set-sync enabled)"));
}

#[test]
fn set_sync_burns_and_writes_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = dir.path().join("out").join("sync.json");

    station()
        .args(["set-sync", "--report", report.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comsat I using"))
        .stdout(predicate::str::contains(
            "Setting orbit of Comsat I to 2.863 Mm.",
        ));

    let text = fs::read_to_string(&report).expect("report written");
    assert!(text.contains("\"applied\": true"));
    assert!(text.contains("\"engine\": \"Spark\""));
}

#[test]
fn far_target_needs_force() {
    station()
        .args(["set-sma", "--target", "10", "--unit", "mm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --force"))
        .stderr(predicate::str::contains(
            "correction outside the station keeping tolerance",
        ));
}

#[test]
fn report_write_is_logged_at_info() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = dir.path().join("sync.json");

    station()
        .env("RUST_LOG", "info")
        .args(["set-sync", "--report", report.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("wrote maneuver report"));
}

#[test]
fn landed_vessel_is_refused() {
    station()
        .args([
            "set-sma",
            "--vessel",
            "Mun Lander",
            "--target",
            "40",
            "--unit",
            "km",
            "--force",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Cannot set station: Mun Lander not in orbit.",
        ))
        .stderr(predicate::str::contains("not in orbit"));
}

#[test]
fn unknown_vessel_is_an_error() {
    station()
        .args(["status", "--vessel", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ghost"));
}
