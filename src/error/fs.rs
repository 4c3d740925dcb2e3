//! File system errors
//!
//! Constructors take the path first so they read naturally inside
//! `map_err(|e| fs::read_failed(&path, e))`.

use std::path::Path;

use super::AmentIndexError;

/// Creates a marker read error
pub fn read_failed(path: &Path, source: std::io::Error) -> AmentIndexError {
    AmentIndexError::ResourceReadFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates a directory listing error
pub fn list_failed(path: &Path, source: std::io::Error) -> AmentIndexError {
    AmentIndexError::ResourceDirectoryReadFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates an index directory creation error
pub fn create_dir_failed(path: &Path, source: std::io::Error) -> AmentIndexError {
    AmentIndexError::IndexDirectoryCreateFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates a marker creation error
pub fn create_failed(path: &Path, source: std::io::Error) -> AmentIndexError {
    AmentIndexError::MarkerCreateFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates a marker content write error
pub fn write_failed(path: &Path, source: std::io::Error) -> AmentIndexError {
    AmentIndexError::MarkerWriteFailed {
        path: path.to_path_buf(),
        source,
    }
}
