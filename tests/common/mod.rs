//! Shared testing utilities for postcraft CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `postcraft` binary with a clean environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("postcraft").expect("Failed to locate postcraft binary");
        cmd.current_dir(self.work_dir())
            .env_remove("POSTCRAFT_CONFIG")
            .env_remove("POSTCRAFT_LOG")
            .env_remove("RUST_LOG")
            .env_remove("CREW_API_KEY");
        cmd
    }

    /// Write `postcraft.toml` into the working directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("postcraft.toml");
        fs::write(&path, content).expect("Failed to write postcraft.toml");
        path
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        let content =
            fs::read_to_string(self.work_dir().join(relative)).expect("Failed to read export");
        serde_json::from_str(&content).expect("Export is not valid JSON")
    }
}
