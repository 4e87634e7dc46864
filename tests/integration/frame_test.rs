//! Integration tests for `playreel frame`

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture, playreel_default};

#[test]
fn writes_final_frame_to_file() {
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("final.svg");
    let (_dir, mut cmd) = playreel_default();

    cmd.args(["frame", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 800 300\""));
    assert!(svg.contains("75 yds"));
    assert!(svg.contains("TOUCHDOWN!"));
}

#[test]
fn scale_sets_document_size() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["frame", "--scale", "2", "-o", "-", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"1600\" height=\"600\""));
}

#[test]
fn tackled_run_shows_tackler_at_the_end() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["frame", "--at", "1", "-o", "-", "-e"])
        .arg(fixture("structured_run.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("K.Van Noy"))
        .stdout(predicate::str::contains("TOUCHDOWN!").not());
}

#[test]
fn writes_numbered_sequence() {
    let out_dir = TempDir::new().unwrap();
    let seq = out_dir.path().join("frames");
    let (_dir, mut cmd) = playreel_default();

    cmd.args(["frame", "--fps", "10", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .arg("--sequence")
        .arg(&seq)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    assert!(seq.join("frame_0000.svg").exists());
    assert!(seq.join("frame_0030.svg").exists());
    let count = fs::read_dir(&seq).unwrap().count();
    assert!((31..=32).contains(&count), "count = {}", count);
}

#[test]
fn progress_out_of_range_is_rejected() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["frame", "--at", "2", "-o", "-", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 1"));
}

#[test]
fn nothing_to_render_exits_with_failure() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["frame", "-o", "-", "-q", "mahomes 2024 stats", "-r"])
        .arg(fixture("season_stats.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
