//! Common test utilities for integration tests

use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a `.env` file with the given contents into `dir`.
#[allow(dead_code)]
pub fn write_env_file(dir: &Path, contents: &str) {
    std::fs::write(dir.join(".env"), contents).expect("Failed to write .env");
}
