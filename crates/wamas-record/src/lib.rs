#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-record
//!
//! Ordered record and value-tree model shared by the WAMAS translation
//! crates.
//!
//! Decoded telegram lines, linked order aggregates and parsed UBL
//! documents all use the same representation: an insertion-ordered map of
//! [`Value`]s addressable by dotted paths. Field order matters because
//! the fixed-width grammars define wire order through insertion order.

/// Dotted-path parsing and resolution over value trees.
pub mod path;
/// Value enum and the insertion-ordered map.
pub mod value;

/// Path primitives.
pub use path::{Path, lookup, resolve_segments};
/// Value primitives.
pub use value::{Map, Record, Value};

use thiserror::Error;

/// Errors that can occur when working with records and paths
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl Error {
    /// Build an invalid-path error with input path and parsing reason.
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Crate-local result type for record operations.
pub type Result<T> = std::result::Result<T, Error>;
