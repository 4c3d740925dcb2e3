//! The resource value type
//!
//! A **Resource** is a marker file registered in the resource index of one
//! install prefix, identified by its type and name. Resources are built from
//! disk on every lookup; the file system is the store of record.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::index::resource_marker_path;

/// A marker found in, or destined for, the resource index of a prefix
///
/// Examples:
/// - `packages/rclcpp` under `/opt/ros/jazzy` (empty content)
/// - `rosidl_interfaces/std_msgs` listing the package's interface files
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Category of the resource (e.g., "packages")
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Name of the resource, unique within its type per prefix
    pub name: String,

    /// Install prefix owning the marker
    pub prefix_path: PathBuf,

    /// Raw text of the marker file, possibly empty
    pub content: String,
}

impl Resource {
    /// Create a new resource
    #[must_use]
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        prefix_path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            prefix_path: prefix_path.into(),
            content: content.into(),
        }
    }

    /// Create a resource with an empty marker
    #[must_use]
    pub fn without_content(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        prefix_path: impl Into<PathBuf>,
    ) -> Self {
        Self::new(resource_type, name, prefix_path, String::new())
    }

    /// Location of this resource's marker file
    #[must_use]
    pub fn marker_path(&self) -> PathBuf {
        resource_marker_path(&self.prefix_path, &self.resource_type, &self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_resource_new() {
        let resource = Resource::new("packages", "foo", "/opt/ros", "data");
        assert_eq!(resource.resource_type, "packages");
        assert_eq!(resource.name, "foo");
        assert_eq!(resource.prefix_path, Path::new("/opt/ros"));
        assert_eq!(resource.content, "data");
    }

    #[test]
    fn test_resource_without_content() {
        let resource = Resource::without_content("packages", "foo", "/opt/ros");
        assert_eq!(resource.content, "");
        assert_eq!(
            resource,
            Resource::new("packages", "foo", "/opt/ros", String::new())
        );
    }

    #[test]
    fn test_marker_path() {
        let resource = Resource::without_content("packages", "foo", "/opt/ros");
        assert_eq!(
            resource.marker_path(),
            Path::new("/opt/ros")
                .join("share")
                .join("ament_index")
                .join("resource_index")
                .join("packages")
                .join("foo")
        );
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let resource = Resource::new("packages", "foo", "/opt/ros", "");
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "packages");
        assert_eq!(json["name"], "foo");

        let back: Resource = serde_json::from_value(json).unwrap();
        assert_eq!(back, resource);
    }
}
