//! Integration tests for top-level CLI behavior.

mod common;

use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    robot_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_is_printed() {
    robot_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("robot-guard"));
}

#[test]
fn check_help_mentions_plugin_environment() {
    robot_guard!()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLUGIN_PASS_THRESHOLD"))
        .stdout(predicate::str::contains("PLUGIN_REPORT_DIRECTORY"));
}

#[test]
fn unknown_command_fails() {
    robot_guard!().arg("frobnicate").assert().failure();
}
