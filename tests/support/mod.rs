//! Test support utilities for courier integration tests.
//!
//! Provides isolated environments, command shortcuts and a mock Postman API.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;
pub mod mock;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use courier::core::profile::Profile;
use courier::core::store::{FileStore, ProfileFile, ProfileStore};
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and home directory. Child
/// processes get both through `.current_dir()` and `HOME`, so tests can run
/// in parallel.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Path of the home profile file.
    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".courier").join("config.toml")
    }

    /// Store for the home profile file, without the project overlay.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.config_path(), None)
    }

    /// Write `profiles` to the home profile file.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        let t = Self::new();
        let mut file = ProfileFile::default();
        file.login.profiles = profiles;
        t.store().store(&file).expect("failed to write profiles");
        t
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        path
    }
}
