//! Search path resolution
//!
//! Turns the value of [`AMENT_PREFIX_PATH_ENV_VAR`] into the ordered list of
//! install prefixes the index consults. Order is precedence: when the same
//! resource exists under two prefixes, the earlier one wins.

use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::config::{AMENT_PREFIX_PATH_ENV_VAR, Environment, ProcessEnvironment};
use crate::error::{Result, config};

/// Ordered prefixes from the process environment
///
/// # Errors
///
/// Returns [`AmentIndexError::PrefixPathNotSet`](crate::error::AmentIndexError::PrefixPathNotSet)
/// when the variable is unset. A set variable whose entries are all filtered
/// out yields an empty list instead.
pub fn get_search_paths() -> Result<Vec<PathBuf>> {
    get_search_paths_from(&ProcessEnvironment)
}

/// Ordered prefixes from `env`
///
/// # Errors
///
/// Same as [`get_search_paths`].
pub fn get_search_paths_from<E: Environment + ?Sized>(env: &E) -> Result<Vec<PathBuf>> {
    let value = env
        .var_os(AMENT_PREFIX_PATH_ENV_VAR)
        .ok_or_else(|| config::prefix_path_not_set(AMENT_PREFIX_PATH_ENV_VAR))?;
    let paths = parse_search_paths(&value);
    debug!(count = paths.len(), ?paths, "resolved search paths");
    Ok(paths)
}

/// Split a path list on the platform separator and keep existing directories
///
/// Blank tokens and tokens that do not name a directory are dropped; the
/// remaining tokens keep their order and their spelling.
#[must_use]
pub fn parse_search_paths(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|path| {
            if path.as_os_str().to_string_lossy().trim().is_empty() {
                return false;
            }
            if !path.is_dir() {
                trace!(path = %path.display(), "skipping search path entry that is not a directory");
                return false;
            }
            true
        })
        .collect()
}
