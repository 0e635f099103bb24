//! Move semantics: atomic rename for files, copy-then-prune for trees.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::copy::copy_as;
use super::helpers::{base_name, require_directory, require_exists, require_parent};
use super::remove::remove;
use crate::errors::{ResourceError, Result};
use crate::probe;

/// Move `path` to exactly `target`.
///
/// A file move is a single rename: it either fully succeeds or leaves the
/// source untouched (a cross-device rename failure surfaces as an error
/// rather than degrading to a copy). A directory move is copy-then-remove-
/// source and is not atomic: a crash in between leaves both trees present
/// and observable.
pub fn move_as(path: &Path, target: &Path, replace_existing: bool) -> Result<PathBuf> {
    require_exists(path)?;
    require_parent(target)?;
    if probe::exists(target)? && !replace_existing {
        return Err(ResourceError::AlreadyExists(target.to_path_buf()));
    }

    if probe::is_directory(path)? && !probe::is_symlink(path)? {
        copy_as(path, target, replace_existing)?;
        remove(path)?;
    } else {
        if replace_existing && probe::exists(target)? {
            remove(target)?;
        }
        fs::rename(path, target).map_err(|e| ResourceError::io(target, e))?;
    }
    info!(src = %path.display(), dest = %target.display(), "moved");
    Ok(target.to_path_buf())
}

/// Move `path` into `directory`, keeping its name.
pub fn move_to(path: &Path, directory: &Path, replace_existing: bool) -> Result<PathBuf> {
    require_exists(path)?;
    require_directory(directory)?;
    let target = directory.join(base_name(path)?);
    move_as(path, &target, replace_existing)
}
