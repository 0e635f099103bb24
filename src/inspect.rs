//! Content-type detection and content hashing for leaf resources.
//!
//! Both delegate the interesting part to external collaborators: MIME
//! guessing to `mime_guess`, digests to `sha2`. Directories have neither a
//! content type nor a hash by definition; both queries answer `None` for
//! them rather than failing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use sha2::{Digest, Sha256, Sha512};

use crate::errors::{ResourceError, Result};
use crate::probe;

/// Read-buffer size for hashing. Bounds memory on arbitrarily large files;
/// the digest is bit-identical to hashing the whole content in one update.
const HASH_CHUNK_SIZE: usize = 64 * 1024;

/// Supported digest families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    /// Canonical algorithm name as digest providers spell it.
    pub fn canonical_name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// Best-guess MIME type for `path`: `None` for directories, and `None`
/// when the detector has no opinion.
pub fn content_type(path: &Path) -> Result<Option<String>> {
    if !probe::exists(path)? {
        return Err(ResourceError::NotFound(path.to_path_buf()));
    }
    if probe::is_directory(path)? {
        return Ok(None);
    }
    Ok(mime_guess::from_path(path).first_raw().map(str::to_string))
}

/// Lowercase hex digest of the file content: `None` for directories.
///
/// Deterministic for unchanged content; 64 hex characters for SHA-256,
/// 128 for SHA-512. The file handle is dropped on every exit path.
pub fn content_hash(path: &Path, algorithm: DigestAlgorithm) -> Result<Option<String>> {
    if !probe::exists(path)? {
        return Err(ResourceError::NotFound(path.to_path_buf()));
    }
    if probe::is_directory(path)? {
        return Ok(None);
    }

    let digest = match algorithm {
        DigestAlgorithm::Sha256 => hash_file(path, Sha256::new())?,
        DigestAlgorithm::Sha512 => hash_file(path, Sha512::new())?,
    };
    Ok(Some(digest))
}

fn hash_file<D: Digest>(path: &Path, mut hasher: D) -> Result<String> {
    let mut file = File::open(path).map_err(|e| ResourceError::io(path, e))?;
    let mut buf = vec![0u8; HASH_CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| ResourceError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
