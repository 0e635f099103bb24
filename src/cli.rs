//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - RESFS_LOG_LEVEL supplies the level when neither flag is given.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::logging::LogLevel;
use resfs::{CapacityUnit, DigestAlgorithm};

/// CLI wrapper for the resfs library.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Probe, list, size, inspect and mutate filesystem resources"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit results on stdout and logs as structured JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the descendants of a directory, parents before children.
    List {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,

        /// Maximum recursion depth; direct children are depth 1.
        /// Unlimited when omitted.
        #[arg(long, value_name = "N")]
        depth: Option<usize>,

        /// Exclude dotfiles (and everything beneath hidden directories).
        #[arg(long)]
        no_hidden: bool,

        /// Include symbolic links in the listing (they are never traversed).
        #[arg(long)]
        symlinks: bool,
    },

    /// Report the recursive content size of a resource.
    Size {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,

        /// Unit to report in.
        #[arg(long, value_enum, default_value = "byte")]
        unit: CapacityUnit,

        /// Decimal digits to round to (half-up).
        #[arg(long, default_value_t = 0, value_name = "DIGITS")]
        scale: u32,
    },

    /// Guess the content type of a file.
    Type {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Compute a content hash of a file.
    Hash {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,

        /// Digest family to use.
        #[arg(long, value_enum, default_value = "sha256")]
        algorithm: DigestAlgorithm,
    },

    /// Delete a resource, recursively for directories.
    Remove {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },

    /// Create a file at PATH from stdin.
    Create {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Copy SRC to DEST, or into the directory DEST with --into.
    Copy {
        #[arg(value_hint = ValueHint::AnyPath)]
        src: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dest: PathBuf,

        /// Treat DEST as an existing directory to copy into, keeping SRC's name.
        #[arg(long)]
        into: bool,

        /// Replace an existing destination.
        #[arg(long)]
        replace: bool,
    },

    /// Move SRC to DEST, or into the directory DEST with --into.
    Move {
        #[arg(value_hint = ValueHint::AnyPath)]
        src: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        dest: PathBuf,

        /// Treat DEST as an existing directory to move into, keeping SRC's name.
        #[arg(long)]
        into: bool,

        /// Replace an existing destination.
        #[arg(long)]
        replace: bool,
    },

    /// Rename a resource in place (same parent directory).
    Rename {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
        new_name: String,
    },
}

impl Args {
    /// Effective log level.
    ///
    /// Precedence: --debug > --log-level > RESFS_LOG_LEVEL > normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        if let Some(s) = &self.log_level
            && let Some(lvl) = LogLevel::parse(s)
        {
            return lvl;
        }
        if let Ok(s) = std::env::var("RESFS_LOG_LEVEL")
            && let Some(lvl) = LogLevel::parse(&s)
        {
            return lvl;
        }
        LogLevel::Normal
    }
}

pub fn parse() -> Args {
    Args::parse()
}
