//! Integration tests for configuration handling

use predicates::prelude::*;

use super::helpers::{fixture, playreel, playreel_default, temp_file};

#[test]
fn show_prints_defaults() {
    let (_dir, mut cmd) = playreel_default();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("frame_interval_ms = 16"))
        .stdout(predicate::str::contains("theme = \"broadcast\""));
}

#[test]
fn show_reflects_config_file() {
    let (_dir, path) = temp_file("config.toml", "[player]\ntheme = \"mono\"\n\n[export]\nscale = 2.0\n");
    playreel(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = \"mono\""))
        .stdout(predicate::str::contains("scale = 2.0"));
}

#[test]
fn export_scale_comes_from_config() {
    let (_dir, path) = temp_file("config.toml", "[export]\nscale = 3.0\n");
    playreel(&path)
        .args(["frame", "-o", "-", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"2400\" height=\"900\""));
}

#[test]
fn show_warns_about_unusable_values() {
    let (_dir, path) = temp_file("config.toml", "[export]\nscale = 0.0\n");
    playreel(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("export.scale must be a positive number"));
}

#[test]
fn migrate_missing_file_creates_nothing_without_terminal() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    playreel(&path)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file"))
        .stdout(predicate::str::contains("No changes made"));
    assert!(!path.exists());
}

#[test]
fn broken_config_fails_other_commands() {
    let (_dir, path) = temp_file("config.toml", "[player\nautoplay = ");
    playreel(&path)
        .args(["extract", "-e"])
        .arg(fixture("kelce_longest_catch.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn broken_config_still_allows_config_commands() {
    let (_dir, path) = temp_file("config.toml", "[player\nautoplay = ");
    playreel(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn migrate_without_terminal_changes_nothing() {
    let (_dir, path) = temp_file("config.toml", "[player]\nautoplay = false\n");
    playreel(&path)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 missing setting(s)"))
        .stdout(predicate::str::contains("[export]"))
        .stdout(predicate::str::contains("frame_interval_ms = 16"))
        .stdout(predicate::str::contains("No changes made"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[player]\nautoplay = false\n");
}
