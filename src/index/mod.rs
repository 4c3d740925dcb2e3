//! The ament resource index
//!
//! Each install prefix carries a tree of marker files:
//!
//! ```text
//! <prefix>/share/ament_index/resource_index/<type>/<name>
//! ```
//!
//! [`ResourceIndex`] walks the prefixes of the search path in order and
//! resolves duplicates first-match-wins. Nothing is cached: every call reads
//! the environment and the file system again.

mod paths;
mod register;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::{Environment, ProcessEnvironment};
use crate::error::{Result, fs as fs_error, validation};
use crate::prefix::get_search_paths_from;
use crate::resource::Resource;

pub use paths::{resource_index_root, resource_marker_path, resource_type_path};

/// Resource lookups and registration against a search path
///
/// The environment is only consulted for the search-path variable.
#[derive(Debug, Default, Clone)]
pub struct ResourceIndex<E = ProcessEnvironment> {
    env: E,
}

impl ResourceIndex {
    /// An index over the process environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> ResourceIndex<E> {
    /// An index over `env`
    #[must_use]
    pub fn with_environment(env: E) -> Self {
        Self { env }
    }

    #[must_use]
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Ordered install prefixes, re-read on every call
    ///
    /// # Errors
    ///
    /// Fails when the search-path variable is unset.
    pub fn search_paths(&self) -> Result<Vec<PathBuf>> {
        get_search_paths_from(&self.env)
    }

    /// Look up one resource, preferring the earliest prefix
    ///
    /// Only regular files count as a match. Returns `Ok(None)` when no prefix
    /// has the marker.
    ///
    /// # Errors
    ///
    /// Fails on an empty type or name, an unset search path, or a marker that
    /// cannot be read as UTF-8 text.
    pub fn get_resource(&self, resource_type: &str, resource_name: &str) -> Result<Option<Resource>> {
        validation::require_type_and_name(resource_type, resource_name)?;

        for prefix in self.search_paths()? {
            let marker = resource_marker_path(&prefix, resource_type, resource_name);
            if !marker.is_file() {
                continue;
            }
            let content = read_marker(&marker)?;
            debug!(resource_type, resource_name, prefix = %prefix.display(), "found resource");
            return Ok(Some(Resource::new(
                resource_type,
                resource_name,
                prefix,
                content,
            )));
        }

        trace!(resource_type, resource_name, "resource not found");
        Ok(None)
    }

    /// All resources of a type, one per name
    ///
    /// Prefixes are visited in search-path order and names within a prefix
    /// in sorted order. A name already seen under an earlier prefix is
    /// skipped. Entries starting with `.` are ignored.
    ///
    /// # Errors
    ///
    /// Fails on an empty type, an unset search path, or an unreadable
    /// directory or marker.
    pub fn get_resources(&self, resource_type: &str) -> Result<Vec<Resource>> {
        validation::require_type(resource_type)?;

        let mut resources = Vec::new();
        let mut seen = HashSet::new();
        for prefix in self.search_paths()? {
            let type_dir = resource_type_path(&prefix, resource_type);
            if !type_dir.is_dir() {
                continue;
            }
            for (name, path) in list_entries(&type_dir)? {
                if seen.contains(&name) {
                    trace!(resource_type, %name, prefix = %prefix.display(), "shadowed by earlier prefix");
                    continue;
                }
                let content = read_marker(&path)?;
                seen.insert(name.clone());
                resources.push(Resource::new(resource_type, name, prefix.clone(), content));
            }
        }

        debug!(resource_type, count = resources.len(), "enumerated resources");
        Ok(resources)
    }

    /// Prefix of the first match, without reading the marker
    ///
    /// Unlike [`get_resource`](Self::get_resource) a directory at the marker
    /// location also counts.
    ///
    /// # Errors
    ///
    /// Fails on an empty type or name or an unset search path.
    pub fn has_resource(&self, resource_type: &str, resource_name: &str) -> Result<Option<PathBuf>> {
        validation::require_type_and_name(resource_type, resource_name)?;

        let found = self
            .search_paths()?
            .into_iter()
            .find(|prefix| resource_marker_path(prefix, resource_type, resource_name).exists());
        Ok(found)
    }

    /// Every resource type present under any prefix, sorted and deduplicated
    ///
    /// # Errors
    ///
    /// Fails on an unset search path or an unreadable index root.
    pub fn get_resource_types(&self) -> Result<Vec<String>> {
        let mut types = BTreeSet::new();
        for prefix in self.search_paths()? {
            let root = resource_index_root(&prefix);
            if !root.is_dir() {
                continue;
            }
            types.extend(
                list_entries(&root)?
                    .into_iter()
                    .filter(|(_, path)| path.is_dir())
                    .map(|(name, _)| name),
            );
        }
        Ok(types.into_iter().collect())
    }

    /// Register a marker under an explicit prefix
    ///
    /// The prefix does not have to be on the search path. Missing directories
    /// are created. Returns `Ok(false)`, leaving the file untouched, when the
    /// marker already exists.
    ///
    /// # Errors
    ///
    /// Fails on an empty type or name, or when directory creation, marker
    /// creation or the content write fail. A failed write leaves an empty
    /// marker behind.
    pub fn register_resource(
        &self,
        resource_type: &str,
        resource_name: &str,
        prefix_path: impl AsRef<Path>,
        content: &str,
    ) -> Result<bool> {
        validation::require_type_and_name(resource_type, resource_name)?;
        let marker = resource_marker_path(prefix_path.as_ref(), resource_type, resource_name);
        register::create_marker(&marker, content)
    }

    /// Register `resource` under its own prefix with its own content
    ///
    /// # Errors
    ///
    /// Same as [`register_resource`](Self::register_resource).
    pub fn register(&self, resource: &Resource) -> Result<bool> {
        self.register_resource(
            &resource.resource_type,
            &resource.name,
            &resource.prefix_path,
            &resource.content,
        )
    }
}

fn read_marker(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))
}

/// Visible entries of `dir` as `(name, path)`, sorted by name
fn list_entries(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| fs_error::list_failed(dir, e))? {
        let entry = entry.map_err(|e| fs_error::list_failed(dir, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            trace!(dir = %dir.display(), "skipping entry with a non UTF-8 name");
            continue;
        };
        if paths::is_hidden(&name) {
            trace!(%name, "skipping hidden entry");
            continue;
        }
        entries.push((name, entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

/// [`ResourceIndex::get_resource`] over the process environment
///
/// # Errors
///
/// See [`ResourceIndex::get_resource`].
pub fn get_resource(resource_type: &str, resource_name: &str) -> Result<Option<Resource>> {
    ResourceIndex::new().get_resource(resource_type, resource_name)
}

/// [`ResourceIndex::get_resources`] over the process environment
///
/// # Errors
///
/// See [`ResourceIndex::get_resources`].
pub fn get_resources(resource_type: &str) -> Result<Vec<Resource>> {
    ResourceIndex::new().get_resources(resource_type)
}

/// [`ResourceIndex::has_resource`] over the process environment
///
/// # Errors
///
/// See [`ResourceIndex::has_resource`].
pub fn has_resource(resource_type: &str, resource_name: &str) -> Result<Option<PathBuf>> {
    ResourceIndex::new().has_resource(resource_type, resource_name)
}

/// [`ResourceIndex::get_resource_types`] over the process environment
///
/// # Errors
///
/// See [`ResourceIndex::get_resource_types`].
pub fn get_resource_types() -> Result<Vec<String>> {
    ResourceIndex::new().get_resource_types()
}

/// [`ResourceIndex::register_resource`]; independent of the search path
///
/// # Errors
///
/// See [`ResourceIndex::register_resource`].
pub fn register_resource(
    resource_type: &str,
    resource_name: &str,
    prefix_path: impl AsRef<Path>,
    content: &str,
) -> Result<bool> {
    ResourceIndex::new().register_resource(resource_type, resource_name, prefix_path, content)
}
