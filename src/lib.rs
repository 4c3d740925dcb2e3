//! ament-index - the ament resource index
//!
//! Installed packages register named resources as marker files under
//! `<prefix>/share/ament_index/resource_index/<type>/<name>`. This crate
//! resolves those markers against the install prefixes listed in
//! `AMENT_PREFIX_PATH`, earliest prefix first, and registers new ones.
//!
//! ```no_run
//! # fn main() -> ament_index::Result<()> {
//! if let Some(prefix) = ament_index::get_package_prefix("rclcpp")? {
//!     println!("rclcpp is installed in {}", prefix.display());
//! }
//! for resource in ament_index::get_resources("rosidl_interfaces")? {
//!     println!("{} ({} bytes)", resource.name, resource.content.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call reads the environment and the file system again; nothing is
//! cached. Use [`ResourceIndex::with_environment`] with a
//! [`FixedEnvironment`](config::FixedEnvironment) to resolve against a search
//! path other than the process's.

pub mod config;
pub mod error;
pub mod index;
pub mod package;
pub mod prefix;
pub mod resource;

#[cfg(test)]
mod test_fixtures;

pub use error::{AmentIndexError, ErrorKind, Result};
pub use index::{
    ResourceIndex, get_resource, get_resource_types, get_resources, has_resource,
    register_resource,
};
pub use package::{
    PackageIndex, get_package_prefix, get_package_share_directory, get_packages_with_prefixes,
    register_package,
};
pub use prefix::get_search_paths;
pub use resource::Resource;
