//! Flat-file persistence for note content.
//!
//! One file per note, named exactly as the validated note name, inside a
//! single base directory. No metadata, no sidecar files: a note exists if
//! and only if its file does. Saving empty content is defined as deletion,
//! so zero-byte files never appear on disk.

use std::fs;
use std::io;
use std::path::Path;

// ============================================================================
// Store Operations
// ============================================================================

/// Persist `content` at `path`, fully replacing any prior content. The
/// containing directory is created on demand. Empty content deletes the
/// note instead, leaving no file behind.
pub fn write(path: &Path, content: &[u8]) -> io::Result<()> {
    if content.is_empty() {
        return delete(path);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Remove the note at `path`. Deleting a note that does not exist is a
/// no-op, not an error.
pub fn delete(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Read the raw bytes of the note at `path`, or `None` if the note does
/// not exist. Other I/O failures propagate to the caller, which decides
/// the response.
pub fn read(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Existence check for the note at `path`.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

// ============================================================================
// Tests
// ============================================================================
