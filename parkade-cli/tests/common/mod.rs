//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home and working directory
//! - Command builder helpers
//! - Script fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The scenario from the project README, one command per line.
#[allow(dead_code)]
pub const SAMPLE_SCRIPT: &str = "\
create_parking_lot 6
park CAR-1
park CAR-2
park CAR-3
park CAR-4
park CAR-5
park CAR-6
leave CAR-6 4
status
park CAR-7
park CAR-8
leave CAR-1 4
leave CAR-3 6
park CAR-9
park CAR-10
park CAR-11
";

/// Expected stdout for [`SAMPLE_SCRIPT`].
#[allow(dead_code)]
pub const SAMPLE_OUTPUT: &str = "\
Created a parking lot with 6 slots
Allocated slot number: 1
Allocated slot number: 2
Allocated slot number: 3
Allocated slot number: 4
Allocated slot number: 5
Allocated slot number: 6
Registration number CAR-6 with Slot Number 6 is free with Charge $30
Slot No.\tRegistration No.
1\t\tCAR-1
2\t\tCAR-2
3\t\tCAR-3
4\t\tCAR-4
5\t\tCAR-5
Allocated slot number: 6
Sorry, parking lot is full
Registration number CAR-1 with Slot Number 1 is free with Charge $30
Registration number CAR-3 with Slot Number 3 is free with Charge $50
Allocated slot number: 1
Allocated slot number: 3
Sorry, parking lot is full
";

/// Test environment with an isolated home and working directory.
///
/// Commands run with `HOME` pointed at the temp dir and every `PARKADE_*`
/// variable cleared, so user configuration cannot leak into tests.
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

    /// Get a command builder running inside this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("parkade").expect("Failed to find parkade binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("PARKADE_CONFIG")
            .env_remove("PARKADE_FORMAT")
            .env_remove("PARKADE_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a command script and return its path.
    pub fn script(&self, contents: &str) -> PathBuf {
        self.write_file("commands.txt", contents)
    }
}
