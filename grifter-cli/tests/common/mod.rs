//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the user's config files
//! - Guest data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two switches joined back to back on two links.
pub const BACK_TO_BACK: &str = r"
sw01:
  vagrant_box: {name: arista/veos}
  provider_config: {nic_adapter_count: 2}
  data_interfaces:
    - {local_port: 1, remote_guest: sw02, remote_port: 1}
    - {local_port: 2, remote_guest: sw02, remote_port: 2}
sw02:
  vagrant_box: {name: arista/veos}
  provider_config: {nic_adapter_count: 2}
  data_interfaces:
    - {local_port: 1, remote_guest: sw01, remote_port: 1}
    - {local_port: 2, remote_guest: sw01, remote_port: 2}
";

/// A guest wired to a guest that does not exist.
pub const DANGLING_LINK: &str = r"
sw01:
  vagrant_box: {name: arista/veos}
  provider_config: {nic_adapter_count: 1}
  data_interfaces:
    - {local_port: 1, remote_guest: sw99, remote_port: 1}
";

/// Test environment with an isolated working and home directory.
///
/// Commands run with the temporary directory as both their working
/// directory and `HOME`, so no config or guest defaults file from the
/// machine running the tests is picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running inside the environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("grifter").expect("Failed to find grifter binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("GRIFTER_CONFIG")
            .env_remove("GRIFTER_GUEST_DEFAULTS")
            .env_remove("GRIFTER_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the back-to-back fixture as `guests.yml`.
    pub fn back_to_back(&self) -> PathBuf {
        self.write_file("guests.yml", BACK_TO_BACK)
    }

    /// Read a file under the environment.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }
}
