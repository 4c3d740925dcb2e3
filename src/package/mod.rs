//! Package lookups on top of the resource index
//!
//! A package is installed when its prefix carries a `packages/<name>` marker.
//! Its share directory is `<prefix>/share/<name>`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Environment, PACKAGE_RESOURCE_TYPE, ProcessEnvironment, SHARE_DIRECTORY};
use crate::error::Result;
use crate::index::ResourceIndex;

/// Package-level view of a [`ResourceIndex`]
#[derive(Debug, Default, Clone)]
pub struct PackageIndex<E = ProcessEnvironment> {
    index: ResourceIndex<E>,
}

impl PackageIndex {
    /// A package index over the process environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> PackageIndex<E> {
    /// A package index over `env`
    #[must_use]
    pub fn with_environment(env: E) -> Self {
        Self::from_index(ResourceIndex::with_environment(env))
    }

    #[must_use]
    pub fn from_index(index: ResourceIndex<E>) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn resource_index(&self) -> &ResourceIndex<E> {
        &self.index
    }

    /// Install prefix of `package_name`, or `None` when not installed
    ///
    /// # Errors
    ///
    /// Fails on an empty name, an unset search path, or an unreadable marker.
    pub fn get_package_prefix(&self, package_name: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .index
            .get_resource(PACKAGE_RESOURCE_TYPE, package_name)?
            .map(|resource| resource.prefix_path))
    }

    /// `<prefix>/share/<package_name>`, or `None` when not installed
    ///
    /// # Errors
    ///
    /// Same as [`get_package_prefix`](Self::get_package_prefix).
    pub fn get_package_share_directory(&self, package_name: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .get_package_prefix(package_name)?
            .map(|prefix| share_directory(&prefix, package_name)))
    }

    /// Every installed package with the prefix it resolves to
    ///
    /// An unset search path is reported as no packages rather than an error,
    /// unlike the rest of the API.
    ///
    /// # Errors
    ///
    /// Fails when a resource directory or marker cannot be read.
    pub fn get_packages_with_prefixes(&self) -> Result<BTreeMap<String, PathBuf>> {
        let resources = match self.index.get_resources(PACKAGE_RESOURCE_TYPE) {
            Ok(resources) => resources,
            Err(e) if e.is_configuration() => {
                debug!(error = %e, "search path not configured, no packages installed");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e),
        };

        Ok(resources
            .into_iter()
            .map(|resource| (resource.name, resource.prefix_path))
            .collect())
    }

    /// Register `package_name` under `prefix_path` with an empty marker
    ///
    /// Returns `Ok(false)` when the package is already registered there.
    ///
    /// # Errors
    ///
    /// Fails on an empty name or when the marker cannot be created.
    pub fn register_package(&self, package_name: &str, prefix_path: impl AsRef<Path>) -> Result<bool> {
        self.index
            .register_resource(PACKAGE_RESOURCE_TYPE, package_name, prefix_path, "")
    }
}

/// Share directory of `package_name` installed under `prefix`
#[must_use]
pub fn share_directory(prefix: &Path, package_name: &str) -> PathBuf {
    prefix.join(SHARE_DIRECTORY).join(package_name)
}

/// [`PackageIndex::get_package_prefix`] over the process environment
///
/// # Errors
///
/// See [`PackageIndex::get_package_prefix`].
pub fn get_package_prefix(package_name: &str) -> Result<Option<PathBuf>> {
    PackageIndex::new().get_package_prefix(package_name)
}

/// [`PackageIndex::get_package_share_directory`] over the process environment
///
/// # Errors
///
/// See [`PackageIndex::get_package_share_directory`].
pub fn get_package_share_directory(package_name: &str) -> Result<Option<PathBuf>> {
    PackageIndex::new().get_package_share_directory(package_name)
}

/// [`PackageIndex::get_packages_with_prefixes`] over the process environment
///
/// # Errors
///
/// See [`PackageIndex::get_packages_with_prefixes`].
pub fn get_packages_with_prefixes() -> Result<BTreeMap<String, PathBuf>> {
    PackageIndex::new().get_packages_with_prefixes()
}

/// [`PackageIndex::register_package`]; independent of the search path
///
/// # Errors
///
/// See [`PackageIndex::register_package`].
pub fn register_package(package_name: &str, prefix_path: impl AsRef<Path>) -> Result<bool> {
    PackageIndex::new().register_package(package_name, prefix_path)
}
