//! Command line tests for the `task-generator` binary
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use std::fs;

const BINARY: &str = "task-generator";
const OUTPUT: &str = "tasks.txt";

#[test]
fn fails_without_a_previous_file() {
    let directory = tempfile::tempdir().unwrap();

    Command::cargo_bin(BINARY)
        .unwrap()
        .current_dir(directory.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no previous output file"));

    assert!(!directory.path().join(OUTPUT).exists());
}

#[test]
fn replaces_a_previous_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join(OUTPUT);
    fs::write(&path, "stale\n").unwrap();

    Command::cargo_bin(BINARY)
        .unwrap()
        .current_dir(directory.path())
        .arg("--seed")
        .arg("5")
        .assert()
        .success();

    assert_valid_task_file(&fs::read_to_string(&path).unwrap());

    Command::cargo_bin(BINARY)
        .unwrap()
        .current_dir(directory.path())
        .assert()
        .success();

    assert_valid_task_file(&fs::read_to_string(&path).unwrap());
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    for directory in &[&first, &second] {
        fs::write(directory.path().join(OUTPUT), "").unwrap();
        Command::cargo_bin(BINARY)
            .unwrap()
            .current_dir(directory.path())
            .args(&["--seed", "31337"])
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(first.path().join(OUTPUT)).unwrap(),
        fs::read_to_string(second.path().join(OUTPUT)).unwrap()
    );
}

#[test]
fn truncate_flag_creates_a_missing_file() {
    let directory = tempfile::tempdir().unwrap();

    Command::cargo_bin(BINARY)
        .unwrap()
        .current_dir(directory.path())
        .arg("--truncate")
        .assert()
        .success();

    assert_valid_task_file(&fs::read_to_string(directory.path().join(OUTPUT)).unwrap());
}

#[test]
fn rejects_unknown_arguments() {
    Command::cargo_bin(BINARY)
        .unwrap()
        .arg("--output")
        .arg("elsewhere.txt")
        .assert()
        .failure();
}
