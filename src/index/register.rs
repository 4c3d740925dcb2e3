//! Marker registration
//!
//! Exclusive creation (`O_CREAT | O_EXCL`) is the only synchronization
//! between processes registering the same marker: exactly one of them sees
//! the file created, the rest see it already there.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, fs as fs_error};

/// Create `marker` with `content` unless it already exists
///
/// Returns `Ok(false)` without touching the file when it exists.
pub(super) fn create_marker(marker: &Path, content: &str) -> Result<bool> {
    create_marker_with(marker, content, |file| file)
}

/// [`create_marker`] writing the content through `writer_for(file)`
fn create_marker_with<W: Write>(
    marker: &Path,
    content: &str,
    writer_for: impl FnOnce(File) -> W,
) -> Result<bool> {
    if let Some(parent) = marker.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error::create_dir_failed(parent, e))?;
    }

    let file = match OpenOptions::new().write(true).create_new(true).open(marker) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(marker = %marker.display(), "resource already registered");
            return Ok(false);
        }
        Err(e) => return Err(fs_error::create_failed(marker, e)),
    };

    write_content(&mut writer_for(file), marker, content)?;

    debug!(marker = %marker.display(), bytes = content.len(), "registered resource");
    Ok(true)
}

/// Single write of `content`; a failure leaves the empty marker in place
fn write_content(writer: &mut impl Write, marker: &Path, content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    writer
        .write_all(content.as_bytes())
        .map_err(|e| fs_error::write_failed(marker, e))
}
