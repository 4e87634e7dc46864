//! Integration tests for `playreel extract`

use predicates::prelude::*;

use super::helpers::{fixture, playreel_default, temp_file};

#[test]
fn extracts_touchdown_catch_from_report() {
    let (_report_dir, report) = temp_file("report.txt", "Distance: 75 yards\nTOUCHDOWN\n");
    let (_dir, mut cmd) = playreel_default();

    let output = cmd
        .args(["extract", "--query", "longest catch", "--report"])
        .arg(&report)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    {
      "playType": "receiving",
      "yards": 75,
      "isScoringPlay": true,
      "description": "",
      "fieldPosition100": 75
    }
    "#);
}

#[test]
fn extracts_full_panel_from_envelope() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "--compact", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""yards":75"#))
        .stdout(predicate::str::contains(r#""receiver":"T.Kelce""#))
        .stdout(predicate::str::contains(r#""passer":"P.Mahomes""#))
        .stdout(predicate::str::contains(r#""clock":"7:25""#))
        .stdout(predicate::str::contains(r#""isHome":true"#));
}

#[test]
fn structured_event_wins_over_report_text() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "--compact", "-e"])
        .arg(fixture("structured_run.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""yards":41"#))
        .stdout(predicate::str::contains(r#""rusher":"D.Henry""#))
        .stdout(predicate::str::contains(r#""tackler":"K.Van Noy""#));
}

#[test]
fn non_longest_query_exits_with_failure() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "-q", "mahomes 2024 stats", "-r"])
        .arg(fixture("season_stats.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No longest play found"));
}

#[test]
fn structured_event_ignored_for_non_longest_query() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "-e", "-"])
        .write_stdin(r#"{"query":"mahomes 2024 stats","data":{"longest_play":{"playType":"passing","yards":67}}}"#)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No longest play found"));
}

#[test]
fn reads_envelope_from_stdin() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "--compact", "-e", "-"])
        .write_stdin(r#"{"query":"longest run","output":"Distance: 9 yards"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""playType":"rushing""#))
        .stdout(predicate::str::contains(r#""yards":9"#));
}

#[test]
fn missing_input_file_is_reported() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "-e", "/nonexistent/response.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load input"));
}

#[test]
fn invalid_envelope_is_reported() {
    let (_input_dir, input) = temp_file("response.json", "{not json");
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["extract", "-e"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load input"));
}
