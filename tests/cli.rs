use assert_cmd::prelude::*;
use predicates::ord::eq;
use predicates::str::{contains, PredicateStrExt};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("unable to write input file");
    path
}

const ITEMS: &str = r#"[
    {"size": 2, "value": 3},
    {"size": 3, "value": 4},
    {"size": 4, "value": 5},
    {"size": 5, "value": 6}
]"#;

// `adventure` with no args should exit with a non-zero code.
#[test]
fn cli_no_args() {
    Command::cargo_bin("adventure").unwrap().assert().failure();
}

#[test]
fn cli_version() {
    Command::cargo_bin("adventure")
        .unwrap()
        .arg("-V")
        .assert()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_pack_both_strategies() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let items = write_input(&temp_dir, "items.json", ITEMS);
    for strategy in &["sequential", "parallel"] {
        Command::cargo_bin("adventure")
            .unwrap()
            .args(&["--strategy", *strategy, "--workers", "3", "pack", "--capacity", "5"])
            .arg(&items)
            .assert()
            .success()
            .stdout(eq("7").trim());
    }
}

#[test]
fn cli_sort_every_pool() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let units = write_input(&temp_dir, "units.json", "[5, 2, 4, 1, 3]");
    for pool in &["naive", "shared-queue", "rayon"] {
        Command::cargo_bin("adventure")
            .unwrap()
            .args(&["--strategy", "parallel", "--pool", *pool, "sort"])
            .arg(&units)
            .assert()
            .success()
            .stdout(eq("[1,2,3,4,5]").trim());
    }
}

#[test]
fn cli_best() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let gems = write_input(&temp_dir, "gems.json", "[3, 7, 2, 9, 4]");
    Command::cargo_bin("adventure")
        .unwrap()
        .args(&["--strategy", "parallel", "--workers", "2", "best"])
        .arg(&gems)
        .assert()
        .success()
        .stdout(eq("9").trim());

    let empty = write_input(&temp_dir, "empty.json", "[]");
    Command::cargo_bin("adventure")
        .unwrap()
        .arg("best")
        .arg(&empty)
        .assert()
        .success()
        .stdout(eq("0").trim());
}

#[test]
fn cli_config_file() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let config = write_input(
        &temp_dir,
        "config.json",
        r#"{ "strategy": "parallel", "pool": "rayon", "workers": 2, "min-parallel-block": 2 }"#,
    );
    let units = write_input(&temp_dir, "units.json", "[9, -1, 4, 4, 0, 12, 3]");
    Command::cargo_bin("adventure")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("sort")
        .arg(&units)
        .assert()
        .success()
        .stdout(eq("[-1,0,3,4,4,9,12]").trim());
}

#[test]
fn cli_zero_workers() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let gems = write_input(&temp_dir, "gems.json", "[1]");
    Command::cargo_bin("adventure")
        .unwrap()
        .args(&["--strategy", "parallel", "--workers", "0", "best"])
        .arg(&gems)
        .assert()
        .failure()
        .stderr(contains("worker count must be positive"));
}

#[test]
fn cli_missing_input() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    Command::cargo_bin("adventure")
        .unwrap()
        .args(&["pack", "--capacity", "3"])
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .failure();
}

#[test]
fn cli_bad_json() {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let units = write_input(&temp_dir, "units.json", "[1, 2,");
    Command::cargo_bin("adventure")
        .unwrap()
        .arg("sort")
        .arg(&units)
        .assert()
        .failure()
        .stderr(contains("serde error"));
}
