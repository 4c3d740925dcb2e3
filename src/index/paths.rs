//! Marker locations inside a prefix
//!
//! `<prefix>/share/ament_index/resource_index/<type>/<name>`

use std::path::{Path, PathBuf};

use crate::config::RESOURCE_INDEX_SUBDIRECTORY;

/// Root of the resource index under `prefix`
#[must_use]
pub fn resource_index_root(prefix: &Path) -> PathBuf {
    RESOURCE_INDEX_SUBDIRECTORY
        .iter()
        .fold(prefix.to_path_buf(), |path, segment| path.join(segment))
}

/// Directory holding every marker of `resource_type` under `prefix`
#[must_use]
pub fn resource_type_path(prefix: &Path, resource_type: &str) -> PathBuf {
    resource_index_root(prefix).join(resource_type)
}

/// Marker file of `(resource_type, resource_name)` under `prefix`
#[must_use]
pub fn resource_marker_path(prefix: &Path, resource_type: &str, resource_name: &str) -> PathBuf {
    resource_type_path(prefix, resource_type).join(resource_name)
}

/// Whether a directory entry is reserved and ignored by enumeration
#[must_use]
pub(crate) fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
