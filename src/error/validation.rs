//! Argument validation shared by every index operation

use super::{AmentIndexError, Result};

/// Reject an empty resource type
pub fn require_type(resource_type: &str) -> Result<()> {
    if resource_type.is_empty() {
        return Err(AmentIndexError::EmptyResourceType);
    }
    Ok(())
}

/// Reject an empty resource type or name, type first
pub fn require_type_and_name(resource_type: &str, resource_name: &str) -> Result<()> {
    require_type(resource_type)?;
    if resource_name.is_empty() {
        return Err(AmentIndexError::EmptyResourceName);
    }
    Ok(())
}
