//! Shared pre-condition guards for the operation modules.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use crate::errors::{ResourceError, Result};
use crate::probe;

/// Fail with `NotFound` unless something exists at `path`.
pub(super) fn require_exists(path: &Path) -> Result<()> {
    if probe::exists(path)? {
        Ok(())
    } else {
        Err(ResourceError::NotFound(path.to_path_buf()))
    }
}

/// Fail unless `path` exists and is a directory.
pub(super) fn require_directory(path: &Path) -> Result<()> {
    require_exists(path)?;
    if probe::is_directory(path)? {
        Ok(())
    } else {
        Err(ResourceError::NotADirectory(path.to_path_buf()))
    }
}

/// Fail with `ParentNotFound` unless `target` has an existing parent
/// directory to land in. A bare relative name lives in the current
/// directory, which by definition exists.
pub(super) fn require_parent(target: &Path) -> Result<()> {
    let Some(parent) = target.parent() else {
        return Err(ResourceError::ParentNotFound(target.to_path_buf()));
    };
    if parent.as_os_str().is_empty() || probe::is_directory(parent)? {
        Ok(())
    } else {
        Err(ResourceError::ParentNotFound(target.to_path_buf()))
    }
}

/// Final path component, required by the `*_to` and rename forms.
pub(super) fn base_name(path: &Path) -> Result<&OsStr> {
    path.file_name().ok_or_else(|| ResourceError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })
}
