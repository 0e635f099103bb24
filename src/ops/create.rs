//! Exclusive streaming create.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::helpers::require_parent;
use crate::errors::{ResourceError, Result};
use crate::probe;

const WRITE_BUF_SIZE: usize = 1024 * 1024;

/// Stream `reader` to completion into a newly created file at `path`.
///
/// The destination is opened with `create_new` so an existing resource is
/// never clobbered, and the writer is flushed before returning so the
/// content is visible to an immediately following read. On a mid-stream
/// failure the half-written file is removed best-effort.
pub fn create(path: &Path, mut reader: impl Read) -> Result<PathBuf> {
    if probe::exists(path)? {
        return Err(ResourceError::AlreadyExists(path.to_path_buf()));
    }
    require_parent(path)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| ResourceError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUF_SIZE, file);

    let bytes = match io::copy(&mut reader, &mut writer).and_then(|n| {
        writer.flush()?;
        Ok(n)
    }) {
        Ok(n) => n,
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(path);
            return Err(ResourceError::io(path, e));
        }
    };

    debug!(path = %path.display(), bytes, "created resource");
    Ok(path.to_path_buf())
}
