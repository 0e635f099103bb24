//! Core library for `resfs`.
//!
//! Filesystem resources (files and directories) are manipulated through one
//! consistent engine: [`probe`] answers single-path queries, [`walk::list`]
//! is the only traversal primitive, and [`size`], [`inspect`] and [`ops`]
//! build on those two so filtering and ordering semantics never diverge
//! between sizing, deletion and copying.
//!
//! Everything is synchronous and stateless: no caching between calls, no
//! locks. Concurrent external modification between a pre-condition check and
//! the action itself surfaces as the underlying OS error.

pub mod errors;
pub mod inspect;
pub mod ops;
pub mod output;
pub mod probe;
pub mod size;
pub mod walk;

pub use errors::{ResourceError, Result};
pub use inspect::{DigestAlgorithm, content_hash, content_type};
pub use ops::{copy_as, copy_to, create, move_as, move_to, remove, rename_to};
pub use size::{CapacityUnit, size, size_in_bytes};
pub use walk::{ListingOptions, UNLIMITED_DEPTH, list};
