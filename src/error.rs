// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! The computation itself cannot fail: degenerate n and non-positive ratios
//! are ordinary outcomes. Errors come only from invalid invocation parameters
//! and from b-file I/O.

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invocation parameters out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A b-file line not of the form `<n> <value>`.
    #[error("Malformed b-file line {line}: {content:?}")]
    MalformedBFileLine { line: usize, content: String },

    /// A b-file index column that does not count up from 1.
    #[error("b-file line {line}: expected index {expected}, found {found}")]
    BFileOffset {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
