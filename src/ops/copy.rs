//! Structural copy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::helpers::{base_name, require_directory, require_exists, require_parent};
use super::remove::remove;
use crate::errors::{ResourceError, Result};
use crate::probe;
use crate::walk::{self, ListingOptions, UNLIMITED_DEPTH};

/// Copy `path` to exactly `target`.
///
/// A directory copy creates the target node, then replays the source's
/// recursive listing beneath it, preserving each entry's relative path
/// verbatim. Pre-order guarantees a directory entry is created before its
/// contents arrive. A failure partway surfaces the first failing
/// sub-operation and leaves the entries copied so far in place.
///
/// With `replace_existing`, an existing target is removed wholesale before
/// the copy begins; without it, an existing target fails `AlreadyExists`.
pub fn copy_as(path: &Path, target: &Path, replace_existing: bool) -> Result<PathBuf> {
    require_exists(path)?;
    require_parent(target)?;
    if probe::exists(target)? {
        if !replace_existing {
            return Err(ResourceError::AlreadyExists(target.to_path_buf()));
        }
        remove(target)?;
    }

    if probe::is_directory(path)? && !probe::is_symlink(path)? {
        copy_tree(path, target)?;
    } else {
        fs::copy(path, target).map_err(|e| ResourceError::io(target, e))?;
    }
    info!(src = %path.display(), dest = %target.display(), "copied");
    Ok(target.to_path_buf())
}

/// Copy `path` into `directory`, keeping its name.
pub fn copy_to(path: &Path, directory: &Path, replace_existing: bool) -> Result<PathBuf> {
    require_exists(path)?;
    require_directory(directory)?;
    let target = directory.join(base_name(path)?);
    copy_as(path, &target, replace_existing)
}

fn copy_tree(src: &Path, target: &Path) -> Result<()> {
    fs::create_dir(target).map_err(|e| ResourceError::io(target, e))?;
    for entry in walk::list(src, UNLIMITED_DEPTH, ListingOptions::default())? {
        let rel = entry.strip_prefix(src).map_err(|_| ResourceError::Io {
            path: entry.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "entry outside copied tree"),
        })?;
        let dst = target.join(rel);
        let meta = fs::symlink_metadata(&entry).map_err(|e| ResourceError::io(&entry, e))?;
        if meta.is_dir() {
            fs::create_dir(&dst).map_err(|e| ResourceError::io(&dst, e))?;
        } else {
            fs::copy(&entry, &dst).map_err(|e| ResourceError::io(&dst, e))?;
        }
        debug!(src = %entry.display(), dest = %dst.display(), "copied entry");
    }
    Ok(())
}
