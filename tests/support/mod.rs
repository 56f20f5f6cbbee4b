//! Test support utilities for satchel integration tests.
//!
//! Provides an isolated secrets tree per test and a command builder with a
//! scrubbed environment.

#![allow(dead_code)]

use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const SCRUBBED_ENV: &[&str] = &[
    "SATCHEL_DECRYPT",
    "SATCHEL_SUFFIX",
    "SATCHEL_DESCRIPTION_SUFFIX",
    "SATCHEL_PATTERN_SUFFIX",
    "SATCHEL_LOG",
];

/// Test environment with an isolated secrets tree.
///
/// Each test gets its own temporary directory. No process-global state is
/// mutated; child processes use `.current_dir()` so tests can safely run
/// in parallel.
pub struct Test {
    /// Temporary directory holding the secrets tree
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a test environment pre-populated with a fixture tree.
    ///
    /// `files` is a list of (relative path, contents) pairs; intermediate
    /// directories are created as needed.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, contents) in files {
            t.write(name, contents);
        }
        t
    }

    /// Write one fixture file relative to the tree root.
    pub fn write(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create fixture dir");
        }
        std::fs::write(path, contents).expect("failed to write fixture");
    }

    /// A satchel command rooted at the fixture tree with a scrubbed env.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("satchel").expect("failed to find satchel binary");
        cmd.current_dir(self.dir.path());
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run satchel over `paths` in print (dry-run) mode.
    pub fn print(&self, paths: &[&str]) -> Output {
        self.cmd()
            .args(paths)
            .output()
            .expect("failed to run satchel")
    }
}
