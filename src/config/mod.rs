//! Configuration for the resource index
//!
//! The only runtime configuration is the search-path variable
//! ([`AMENT_PREFIX_PATH_ENV_VAR`]), read through the [`Environment`] trait so
//! that resolution can run against a synthetic environment. The on-disk
//! layout is fixed and described by the constants below.

mod environment;

pub use environment::{Environment, FixedEnvironment, ProcessEnvironment};

/// Environment variable holding the list of install prefixes
pub const AMENT_PREFIX_PATH_ENV_VAR: &str = "AMENT_PREFIX_PATH";

/// Resource index root relative to a prefix, one entry per path segment
pub const RESOURCE_INDEX_SUBDIRECTORY: [&str; 3] = ["share", "ament_index", "resource_index"];

/// Resource type under which packages register themselves
pub const PACKAGE_RESOURCE_TYPE: &str = "packages";

/// Directory holding per-package shared data, relative to a prefix
pub const SHARE_DIRECTORY: &str = "share";
