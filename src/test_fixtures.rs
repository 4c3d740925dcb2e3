//! Test fixtures shared by the unit tests.
//!
//! Builds a pair of install prefixes inside a temp directory with a small
//! resource index in each, and a [`FixedEnvironment`] whose search path lists
//! them in order. Nothing here touches the process environment.
//!
//! ```text
//! prefix1/share/ament_index/resource_index/
//!   packages/{foo, bar}
//!   test_duplicate_resource/foo   "This content is from the first prefix path\n"
//! prefix2/share/ament_index/resource_index/
//!   packages/{foo, baz}
//!   foo_type/foo                  "This is dummy content for test purposes.\n"
//!   bar_type/bar                  "Multi-line\ntest\ndata\n.\n"
//!   test_duplicate_resource/foo   "This content is from the second prefix path\n"
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{AMENT_PREFIX_PATH_ENV_VAR, FixedEnvironment};
use crate::index::resource_marker_path;

/// Two populated prefixes in a temp directory
pub struct IndexFixture {
    /// Keeps the directory alive for the duration of the test
    pub temp: TempDir,
    pub prefix1: PathBuf,
    pub prefix2: PathBuf,
}

impl IndexFixture {
    /// Create both prefixes and their markers.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be populated.
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let prefix1 = temp.path().join("test_prefix1");
        let prefix2 = temp.path().join("test_prefix2");

        write_marker(&prefix1, "packages", "foo", "");
        write_marker(&prefix1, "packages", "bar", "");
        write_marker(
            &prefix1,
            "test_duplicate_resource",
            "foo",
            "This content is from the first prefix path\n",
        );

        write_marker(&prefix2, "packages", "foo", "");
        write_marker(&prefix2, "packages", "baz", "");
        write_marker(
            &prefix2,
            "foo_type",
            "foo",
            "This is dummy content for test purposes.\n",
        );
        write_marker(&prefix2, "bar_type", "bar", "Multi-line\ntest\ndata\n.\n");
        write_marker(
            &prefix2,
            "test_duplicate_resource",
            "foo",
            "This content is from the second prefix path\n",
        );

        Self {
            temp,
            prefix1,
            prefix2,
        }
    }

    /// Environment listing `prefix1` then `prefix2`
    #[must_use]
    pub fn env(&self) -> FixedEnvironment {
        self.env_for(&[self.prefix1.as_path(), self.prefix2.as_path()])
    }

    /// Environment listing `prefixes` in the given order
    ///
    /// # Panics
    ///
    /// Panics if a prefix contains the platform path separator.
    #[must_use]
    pub fn env_for(&self, prefixes: &[&Path]) -> FixedEnvironment {
        let value = std::env::join_paths(prefixes).expect("Failed to join search paths");
        FixedEnvironment::new().with_var(AMENT_PREFIX_PATH_ENV_VAR, value)
    }
}

/// Write a marker file, creating its parent directories.
///
/// # Panics
///
/// Panics if the marker cannot be written.
pub fn write_marker(prefix: &Path, resource_type: &str, name: &str, content: &str) {
    let marker = resource_marker_path(prefix, resource_type, name);
    if let Some(parent) = marker.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create resource type directory");
    }
    std::fs::write(&marker, content).expect("Failed to write marker");
}
