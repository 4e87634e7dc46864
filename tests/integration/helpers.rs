//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Write `content` to a file in a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// The binary, isolated from the user's config and environment.
///
/// `config` need not exist; a missing file means defaults.
pub fn playreel(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("playreel").expect("binary should build");
    cmd.env("PLAYREEL_CONFIG", config)
        .env_remove("RUST_LOG")
        .env_remove("EDITOR");
    cmd
}

/// The binary with default settings.
pub fn playreel_default() -> (TempDir, Command) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cmd = playreel(&dir.path().join("config.toml"));
    (dir, cmd)
}
