//! Error types associated with generating and reading task files.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use err_derive::Error;
use std::{io::Error as IOError, path::PathBuf};

////////////////////////////////////////////////////////////////////////////////
// Generator-related errors.
////////////////////////////////////////////////////////////////////////////////

/// A generic catch-all error type for the task fixture generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Strict mode expects a previous output file to remove, and there was
    /// none.
    #[error(
        display = "GeneratorError: no previous output file to remove at {:?}.",
        path
    )]
    MissingTarget { path: PathBuf },
    /// A file appeared at the output path between removing the old file and
    /// creating the new one.
    #[error(
        display = "GeneratorError: output file {:?} already exists and will not be overwritten.",
        path
    )]
    TargetExists { path: PathBuf },
    /// The sampling parameters cannot be sampled from.
    #[error(display = "GeneratorError: invalid sampling range: {}.", _0)]
    InvalidRange(String),
    /// A task descriptor could not be parsed from its textual form.
    #[error(display = "GeneratorError: malformed task descriptor: {}.", _0)]
    MalformedDescriptor(String),
    /// A line of a task file could not be parsed.
    #[error(
        display = "GeneratorError: parsing failure on line {}: {}.",
        line,
        reason
    )]
    ParseError { line: usize, reason: String },
    /// An IO error occurred when removing, creating, writing or reading a
    /// task file.
    #[error(display = "GeneratorError: an IO error occurred: {:?}.", _0)]
    IOError(#[error(source)] IOError),
}
