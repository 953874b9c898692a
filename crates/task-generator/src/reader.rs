//! Reading task files
//!
//! Mirrors how the scheduler simulator loads its workload: the file is split
//! into lines, the first four whitespace-separated fields of each line are
//! taken, lines with fewer than four fields are skipped, and tasks are
//! numbered from 1 in file order.  Unlike the simulator, a field that is not
//! an integer is reported as an error instead of aborting.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use crate::{
    descriptor::{TaskDescriptor, FIELD_COUNT},
    error::GeneratorError,
};
use log::{info, warn};
use std::{convert::TryFrom, fs::read_to_string, path::Path};

/// A task as the scheduler simulator sees it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TaskRecord {
    /// 1-based position among the accepted lines.
    pub id: u16,
    pub descriptor: TaskDescriptor,
}

/// Reads and parses the task file at `path`.
pub fn read_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<TaskRecord>, GeneratorError> {
    let path = path.as_ref();
    info!("Reading task file: '{}'.", path.display());

    let contents = read_to_string(path)?;
    parse_tasks(&contents)
}

/// Parses the contents of a task file.
pub fn parse_tasks(contents: &str) -> Result<Vec<TaskRecord>, GeneratorError> {
    let mut records = Vec::new();

    for (index, line) in contents.split('\n').enumerate() {
        let fields = line
            .split_whitespace()
            .take(FIELD_COUNT)
            .collect::<Vec<_>>();

        let fields = match fields.as_slice() {
            [a, b, c, d] => [*a, *b, *c, *d],
            [] => continue,
            _ => {
                warn!(
                    "Skipping line {}: expected {} fields, found {}.",
                    index + 1,
                    FIELD_COUNT,
                    fields.len()
                );
                continue;
            }
        };

        let descriptor =
            TaskDescriptor::from_fields(&fields).map_err(|err| GeneratorError::ParseError {
                line: index + 1,
                reason: format!("{}", err),
            })?;

        let id = u16::try_from(records.len() + 1).map_err(|_| GeneratorError::ParseError {
            line: index + 1,
            reason: String::from("too many tasks to number"),
        })?;

        records.push(TaskRecord { id, descriptor });
    }

    Ok(records)
}
