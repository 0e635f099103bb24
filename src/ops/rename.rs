//! In-place rename under the same parent.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::helpers::require_exists;
use crate::errors::{ResourceError, Result};
use crate::probe;

/// Rename `path` to `new_name` alongside its current siblings.
///
/// Fails `AlreadyExists` when the sibling name is taken (renaming to the
/// current name counts). Works for files and directories alike; a same-
/// directory rename is a single filesystem operation.
pub fn rename_to(path: &Path, new_name: &str) -> Result<PathBuf> {
    require_exists(path)?;
    let parent = path
        .parent()
        .ok_or_else(|| ResourceError::ParentNotFound(path.to_path_buf()))?;
    let target = parent.join(new_name);
    if probe::exists(&target)? {
        return Err(ResourceError::AlreadyExists(target));
    }

    fs::rename(path, &target).map_err(|e| ResourceError::io(&target, e))?;
    info!(src = %path.display(), dest = %target.display(), "renamed");
    Ok(target)
}
