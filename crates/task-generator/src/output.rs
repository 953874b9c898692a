//! Preparing the output file, and writing task descriptors into it.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use crate::{descriptor::TaskDescriptor, error::GeneratorError};
use log::info;
use std::{
    fs::{remove_file, File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

/// How an existing task file is replaced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// Remove the previous file, failing if there is none, then create the
    /// new file exclusively.
    Strict,
    /// Open the file in a single step, creating it if absent and truncating
    /// it otherwise.
    Truncate,
}

impl Default for OutputMode {
    #[inline]
    fn default() -> Self {
        OutputMode::Strict
    }
}

/// Opens an empty file at `path` for writing, per `mode`.
pub fn prepare_output(path: &Path, mode: OutputMode) -> Result<File, GeneratorError> {
    match mode {
        OutputMode::Strict => {
            info!("Removing previous output file: '{}'.", path.display());
            remove_file(path).map_err(|err| match err.kind() {
                ErrorKind::NotFound => GeneratorError::MissingTarget {
                    path: path.to_path_buf(),
                },
                _ => GeneratorError::IOError(err),
            })?;

            create_exclusive(path)
        }
        OutputMode::Truncate => {
            info!("Truncating or creating output file: '{}'.", path.display());
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            Ok(file)
        }
    }
}

/// Creates a new file at `path`, failing with `GeneratorError::TargetExists`
/// if anything is already there.
pub fn create_exclusive(path: &Path) -> Result<File, GeneratorError> {
    info!("Creating output file: '{}'.", path.display());

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => GeneratorError::TargetExists {
                path: path.to_path_buf(),
            },
            _ => GeneratorError::IOError(err),
        })
}

/// Writes one line per descriptor, in order, and flushes the writer.
pub fn write_descriptors<W: Write>(
    writer: W,
    descriptors: &[TaskDescriptor],
) -> Result<(), GeneratorError> {
    let mut writer = BufWriter::new(writer);

    for descriptor in descriptors {
        writeln!(writer, "{}", descriptor)?;
    }

    writer.flush()?;
    Ok(())
}
