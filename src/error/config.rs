//! Configuration errors

use super::AmentIndexError;

/// Creates a "search path variable is not set" error
pub fn prefix_path_not_set(var: impl Into<String>) -> AmentIndexError {
    AmentIndexError::PrefixPathNotSet { var: var.into() }
}
