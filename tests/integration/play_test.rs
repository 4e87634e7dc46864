//! Integration tests for `playreel play` outside a terminal

use predicates::prelude::*;

use super::helpers::{fixture, playreel_default};

#[test]
fn non_longest_query_prints_report() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["play", "-q", "mahomes 2024 stats", "-r"])
        .arg(fixture("season_stats.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Passing Yards: 3928"));
}

#[test]
fn failed_query_prints_error() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["play", "-e"])
        .arg(fixture("failed_query.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("No player matched 'nobody'"));
}

#[test]
fn animation_needs_a_terminal() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["play", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn completions_are_generated() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("playreel"));
}

#[test]
fn version_includes_build_date() {
    let (_dir, mut cmd) = playreel_default();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("built"));
}

#[test]
fn package_metadata_is_playreel_only() {
    assert_eq!(env!("CARGO_PKG_NAME"), "playreel");
    assert!(env!("CARGO_PKG_AUTHORS").is_empty());
    assert!(env!("CARGO_PKG_REPOSITORY").is_empty());

    let (_dir, mut cmd) = playreel_default();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sanladerer").not())
        .stdout(predicate::str::contains("Session Record").not());
}
