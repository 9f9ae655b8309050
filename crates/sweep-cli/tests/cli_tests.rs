// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! End-to-end checks for the `sweep-demo` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn demo(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sweep-demo").unwrap();
    cmd.arg("--config-dir").arg(config_dir).env("RUST_LOG", "warn");
    cmd
}

#[test]
fn print_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    demo(dir.path())
        .arg("print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sensor_count\": 3"))
        .stdout(predicate::str::contains("\"mode\": \"tick_modulus\""));
}

#[test]
fn save_config_persists_a_file_config() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("wide.json");
    std::fs::write(&file, r#"{ "sensor_count": 5, "stop_after_first_hit": true }"#).unwrap();

    demo(dir.path())
        .args(["save-config", "--config"])
        .arg(&file)
        .assert()
        .success();
    assert!(dir.path().join("sweep_sensor.json").exists());

    demo(dir.path())
        .arg("print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sensor_count\": 5"))
        .stdout(predicate::str::contains("\"stop_after_first_hit\": true"));
}

#[test]
fn run_prints_a_summary() {
    let dir = tempfile::tempdir().unwrap();
    demo(dir.path())
        .args(["run", "--ticks", "120", "--targets", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ticks 120"))
        .stdout(predicate::str::contains("dummy-3"));
}

#[test]
fn run_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bad.json");
    std::fs::write(&file, r#"{ "sensor_count": 1 }"#).unwrap();
    demo(dir.path())
        .args(["run", "--config"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sensor config"));
}

#[test]
fn run_rejects_non_positive_dt() {
    let dir = tempfile::tempdir().unwrap();
    demo(dir.path())
        .args(["run", "--dt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dt"));
}
