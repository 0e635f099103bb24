//! Recursive removal.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::helpers::require_exists;
use crate::errors::{ResourceError, Result};
use crate::probe;
use crate::walk::{self, ListingOptions, UNLIMITED_DEPTH};

/// Delete `path`, recursing first when it is a directory.
///
/// The descendant walk is all-inclusive: hidden files and symbolic links
/// are deleted regardless of the default listing filters. Consuming the
/// pre-order listing in reverse yields children before their parents, so
/// every directory is already empty when its turn comes.
///
/// Removal is not idempotent: removing an absent path fails `NotFound`.
pub fn remove(path: &Path) -> Result<()> {
    require_exists(path)?;

    // A symlink is deleted as a link even when it points at a directory.
    if probe::is_symlink(path)? || !probe::is_directory(path)? {
        fs::remove_file(path).map_err(|e| ResourceError::io(path, e))?;
        debug!(path = %path.display(), "removed file");
        return Ok(());
    }

    let entries = walk::list(path, UNLIMITED_DEPTH, ListingOptions::all())?;
    for entry in entries.iter().rev() {
        let meta = fs::symlink_metadata(entry).map_err(|e| ResourceError::io(entry, e))?;
        if meta.is_dir() {
            fs::remove_dir(entry).map_err(|e| ResourceError::io(entry, e))?;
        } else {
            fs::remove_file(entry).map_err(|e| ResourceError::io(entry, e))?;
        }
    }
    fs::remove_dir(path).map_err(|e| ResourceError::io(path, e))?;
    info!(path = %path.display(), entries = entries.len(), "removed directory tree");
    Ok(())
}
