//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home and project directory
//! - Command builder helpers
//! - Fixture files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home and project directory.
///
/// Commands run inside `project` with `HOME` pointing at `home`, so no
/// configuration from the machine running the tests leaks in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Home directory used by the binary
    pub home: PathBuf,
    /// Working directory of the binary
    pub project: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = std::fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize");
        let home = root.join("home");
        let project = root.join("project");
        std::fs::create_dir_all(&home).expect("Failed to create home");
        std::fs::create_dir_all(&project).expect("Failed to create project");

        Self {
            temp_dir,
            home,
            project,
        }
    }

    /// Get a command builder running in the project directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathalias").expect("Failed to find pathalias binary");
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env_remove("PATHALIAS_ROOT")
            .env_remove("PATHALIAS_BASE_URL")
            .env_remove("PATHALIAS_CONFIG")
            .env_remove("PATHALIAS_LOG_MODE");
        cmd
    }

    /// Create a directory under the project and return its `/` path.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.project.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        slashed(&path)
    }

    /// Create a file under the project and return its `/` path.
    pub fn create_file(&self, name: &str) -> String {
        let path = self.project.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, name).expect("Failed to write test file");
        slashed(&path)
    }

    /// Write `pathalias.yaml` in the project directory.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.project.join("pathalias.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".pathalias");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// The project directory as a `/` path.
    pub fn project_str(&self) -> String {
        slashed(&self.project)
    }

    /// Run a command that must succeed and return its trimmed stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a path with `/` separators.
pub fn slashed(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
