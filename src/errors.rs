//! Typed error definitions for resfs.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResourceError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Resource already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Parent directory not found for: {0}")]
    ParentNotFound(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResourceError {
    /// Wrap an I/O error with path context. Kinds the taxonomy already
    /// names are classified into their typed variants, so a race between a
    /// pre-condition check and the action still reports the right kind.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            _ => Self::Io { path, source },
        }
    }

    /// Stable process exit code per variant, used by the CLI.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 2,
            Self::NotADirectory(_) => 3,
            Self::AlreadyExists(_) => 4,
            Self::ParentNotFound(_) => 5,
            Self::Io { .. } => 10,
        }
    }

    /// Machine-readable tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::NotADirectory(_) => "not_a_directory",
            Self::AlreadyExists(_) => "already_exists",
            Self::ParentNotFound(_) => "parent_not_found",
            Self::Io { .. } => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_classifies_not_found() {
        let err = ResourceError::io(
            "/some/path",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert_eq!(err.code(), 2);
    }

    #[test]
    fn io_classifies_already_exists() {
        let err = ResourceError::io(
            "/some/path",
            io::Error::new(io::ErrorKind::AlreadyExists, "taken"),
        );
        assert!(matches!(err, ResourceError::AlreadyExists(_)));
        assert_eq!(err.kind(), "already_exists");
    }

    #[test]
    fn io_keeps_other_kinds_generic() {
        let err = ResourceError::io(
            "/some/path",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ResourceError::Io { .. }));
        assert_eq!(err.code(), 10);
    }
}
