//! Single-path queries: existence, kind, and the hidden-name convention.
//! Every mutating operation checks these before acting and fails fast when
//! a pre-condition does not hold.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::{ResourceError, Result};

/// Whether anything (file, directory or symbolic link) exists at `path`.
///
/// A dangling symlink counts as existing. Query failures other than "not
/// found" are surfaced, never swallowed.
pub fn exists(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ResourceError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Whether `path` resolves to a directory. Follows a final symlink, so a
/// link pointing at a directory answers true. Absent paths answer false.
pub fn is_directory(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ResourceError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Whether `path` itself is a symbolic link (the link, not its target).
pub fn is_symlink(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Ok(meta.file_type().is_symlink()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ResourceError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// POSIX dotfile convention: the final path component starts with a dot.
/// Pure name inspection, never touches the filesystem.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
