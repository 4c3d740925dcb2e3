//! Error types and handling for the ament index
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`validation`]: Empty resource type or name arguments
//! - [`config`]: Search path configuration errors
//! - [`fs`]: File system errors while reading or registering markers
//!
//! "Not found" is never an error: lookups return `Ok(None)` or an empty
//! collection when nothing matches.

pub mod config;
pub mod fs;
pub mod validation;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of an [`AmentIndexError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument violated the API contract (empty type or name)
    Validation,
    /// The search path could not be determined
    Configuration,
    /// The file system refused an operation
    Io,
}

/// Main error type for ament index operations
#[derive(Error, Diagnostic, Debug)]
pub enum AmentIndexError {
    // Validation errors
    #[error("Resource type must not be empty")]
    #[diagnostic(code(ament_index::validation::empty_type))]
    EmptyResourceType,

    #[error("Resource name must not be empty")]
    #[diagnostic(code(ament_index::validation::empty_name))]
    EmptyResourceName,

    // Configuration errors
    #[error("Environment variable '{var}' is not set")]
    #[diagnostic(
        code(ament_index::config::prefix_path_not_set),
        help("Source the setup script of a workspace, or set the variable to a list of install prefixes")
    )]
    PrefixPathNotSet { var: String },

    // File system errors
    #[error("Failed to read resource marker: {}", .path.display())]
    #[diagnostic(code(ament_index::fs::read_failed))]
    ResourceReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list resource directory: {}", .path.display())]
    #[diagnostic(code(ament_index::fs::list_failed))]
    ResourceDirectoryReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create resource index directory: {}", .path.display())]
    #[diagnostic(
        code(ament_index::fs::create_dir_failed),
        help("Check that the install prefix is writable")
    )]
    IndexDirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create resource marker: {}", .path.display())]
    #[diagnostic(code(ament_index::fs::create_failed))]
    MarkerCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write resource marker content: {}", .path.display())]
    #[diagnostic(
        code(ament_index::fs::write_failed),
        help("The marker was created but is empty; remove it before registering again")
    )]
    MarkerWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AmentIndexError {
    /// Classify this error into the validation / configuration / I/O taxonomy
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyResourceType | Self::EmptyResourceName => ErrorKind::Validation,
            Self::PrefixPathNotSet { .. } => ErrorKind::Configuration,
            Self::ResourceReadFailed { .. }
            | Self::ResourceDirectoryReadFailed { .. }
            | Self::IndexDirectoryCreateFailed { .. }
            | Self::MarkerCreateFailed { .. }
            | Self::MarkerWriteFailed { .. } => ErrorKind::Io,
        }
    }

    /// Whether this error means the search path is not configured
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AmentIndexError>;
