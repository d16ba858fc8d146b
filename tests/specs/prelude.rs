//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the tiercheck CLI against temp projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the tiercheck binary with a clean environment.
pub fn tiercheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tiercheck"));
    for var in [
        "TIERCHECK_CONFIG",
        "TIERCHECK_TIMING_MODE",
        "TIERCHECK_HERMETICITY_MODE",
        "TIERCHECK_DISTRIBUTION_MODE",
        "TIERCHECK_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A temporary project directory (marked as a git root so discovery stops here).
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.config(config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self, content: &str) {
        self.file("tiercheck.toml", content);
    }

    pub fn results(&self, json: &str) {
        self.file("results.json", json);
    }

    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// `tiercheck <args>` run inside the project.
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = tiercheck_cmd();
        cmd.current_dir(self.path()).args(args);
        cmd
    }

    /// Run `tiercheck check results.json` and parse the JSON report from stdout.
    pub fn check(&self, extra: &[&str]) -> RunOutput {
        let mut args = vec!["check", "results.json"];
        args.extend_from_slice(extra);
        let output = self.cmd(&args).output().unwrap();
        RunOutput::from(output)
    }
}

/// Captured CLI output with the report parsed.
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}\nstderr:\n{}", self.stdout, self.stderr))
    }

    pub fn verdict(&self) -> String {
        self.json()["verdict"].as_str().unwrap().to_string()
    }

    /// Violations surfaced for `domain`, or an empty list.
    pub fn violations(&self, domain: &str) -> Vec<serde_json::Value> {
        self.json()["domains"]
            .as_array()
            .unwrap()
            .iter()
            .find(|d| d["domain"] == domain)
            .map(|d| d["violations"].as_array().unwrap().clone())
            .unwrap_or_default()
    }
}
