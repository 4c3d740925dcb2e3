//! Common test utilities for ament-index integration tests

#![allow(dead_code)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ament_index::config::AMENT_PREFIX_PATH_ENV_VAR;
use ament_index::index::resource_marker_path;
use tempfile::TempDir;

/// Install prefixes in a temp directory
pub struct TestPrefixes {
    /// Temporary directory
    pub temp: TempDir,
    /// Prefixes in search path order
    pub prefixes: Vec<PathBuf>,
}

impl TestPrefixes {
    /// Create `count` empty prefix directories
    pub fn new(count: usize) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let prefixes = (1..=count)
            .map(|i| {
                let prefix = temp.path().join(format!("prefix{i}"));
                std::fs::create_dir_all(&prefix).expect("Failed to create prefix");
                prefix
            })
            .collect();
        Self { temp, prefixes }
    }

    pub fn prefix(&self, index: usize) -> &Path {
        &self.prefixes[index]
    }

    /// Write a marker under the prefix at `index`
    pub fn write_marker(&self, index: usize, resource_type: &str, name: &str, content: &str) {
        let marker = resource_marker_path(self.prefix(index), resource_type, name);
        if let Some(parent) = marker.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&marker, content).expect("Failed to write marker");
    }

    /// Read a marker under the prefix at `index`
    pub fn read_marker(&self, index: usize, resource_type: &str, name: &str) -> String {
        let marker = resource_marker_path(self.prefix(index), resource_type, name);
        std::fs::read_to_string(marker).expect("Failed to read marker")
    }

    /// Search path value listing every prefix in order
    pub fn search_path(&self) -> OsString {
        std::env::join_paths(&self.prefixes).expect("Failed to join search paths")
    }

    /// Point `AMENT_PREFIX_PATH` at these prefixes until the guard drops
    pub fn activate(&self) -> PrefixPathGuard {
        PrefixPathGuard::set(self.search_path())
    }
}

/// Restores `AMENT_PREFIX_PATH` to its original value on drop.
///
/// Tests holding one must be `#[serial]`.
pub struct PrefixPathGuard {
    previous: Option<OsString>,
}

impl PrefixPathGuard {
    pub fn set(value: impl Into<OsString>) -> Self {
        let previous = std::env::var_os(AMENT_PREFIX_PATH_ENV_VAR);
        unsafe {
            std::env::set_var(AMENT_PREFIX_PATH_ENV_VAR, value.into());
        }
        Self { previous }
    }

    pub fn unset() -> Self {
        let previous = std::env::var_os(AMENT_PREFIX_PATH_ENV_VAR);
        unsafe {
            std::env::remove_var(AMENT_PREFIX_PATH_ENV_VAR);
        }
        Self { previous }
    }
}

impl Drop for PrefixPathGuard {
    fn drop(&mut self) {
        unsafe {
            match self.previous.take() {
                Some(value) => std::env::set_var(AMENT_PREFIX_PATH_ENV_VAR, value),
                None => std::env::remove_var(AMENT_PREFIX_PATH_ENV_VAR),
            }
        }
    }
}
