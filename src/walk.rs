//! Recursive directory enumeration.
//!
//! [`list`] is the single traversal primitive; size computation, recursive
//! deletion and recursive copy all consume it, so filtering and ordering
//! semantics stay identical across every bulk operation. Nothing is cached:
//! each call re-walks the live tree, and an enumerated entry may be gone by
//! the time the caller inspects it (no lock is held).

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{ResourceError, Result};
use crate::probe;

/// Depth treated as "no limit" by [`list`].
pub const UNLIMITED_DEPTH: usize = usize::MAX;

/// Enumeration filters. Hidden entries are listed by default; symbolic
/// links are not, and are never traversed even when included, so link
/// loops cannot recurse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    pub include_hidden: bool,
    pub include_symlinks: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            include_symlinks: false,
        }
    }
}

impl ListingOptions {
    /// Include everything. Used where enumeration must be exhaustive,
    /// e.g. recursive deletion.
    pub fn all() -> Self {
        Self {
            include_hidden: true,
            include_symlinks: true,
        }
    }
}

/// List the strict descendants of `root` up to `depth` levels down, in
/// pre-order (parents before children), left-to-right in native directory
/// order. Native order is whatever the filesystem reports; callers needing
/// a deterministic order must sort.
///
/// Direct children are at depth 1; `depth == 0` yields an empty listing
/// (no recursion requested, not an error). `root` itself is never included.
///
/// The two filters compose with AND and apply at every level before
/// recursing: an excluded directory's whole subtree is pruned, not just
/// the directory entry itself.
pub fn list(root: &Path, depth: usize, options: ListingOptions) -> Result<Vec<PathBuf>> {
    if !probe::exists(root)? {
        return Err(ResourceError::NotFound(root.to_path_buf()));
    }
    if !probe::is_directory(root)? {
        return Err(ResourceError::NotADirectory(root.to_path_buf()));
    }
    if depth == 0 {
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(depth)
        .follow_links(false)
        .into_iter()
        // The predicate also sees the root entry (depth 0); it must pass
        // unconditionally so a hidden root can still be listed into.
        .filter_entry(move |e| {
            e.depth() == 0
                || ((options.include_hidden || !probe::is_hidden(e.path()))
                    && (options.include_symlinks || !e.file_type().is_symlink()))
        });

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            match e.into_io_error() {
                Some(source) => ResourceError::io(path, source),
                None => ResourceError::Io {
                    path,
                    source: io::Error::other("directory walk failed"),
                },
            }
        })?;
        entries.push(entry.into_path());
    }
    Ok(entries)
}
