//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use makecard::models::{CardState, RgbColor};

/// Path to the makecard binary
pub fn makecard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_makecard")
}

/// Creates a temp directory for export output.
pub fn temp_output_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Builds a makecard command whose config lookups are isolated to `home`,
/// so a developer's real config file cannot leak into test runs.
pub fn makecard_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(makecard_bin());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DOWNLOAD_DIR", home);
    cmd
}

/// A card with a known non-default look.
pub fn test_card_teal() -> CardState {
    CardState::with_content(
        RgbColor::from_hex("#FFFFFF").expect("valid hex"),
        RgbColor::from_hex("#264653").expect("valid hex"),
        "deep work",
    )
}
