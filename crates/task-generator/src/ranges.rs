//! Sampling ranges
//!
//! All ranges are inclusive at both ends.  The `cpu_burst_len` range is
//! special: its upper bound is a cap, and each sample is further limited by
//! the `max_cpu_time` sampled for the same task, so that a CPU burst never
//! outlasts the task's total CPU time.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use crate::error::GeneratorError;
use std::ops::RangeInclusive;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The default smallest number of tasks in a generated file.
pub const DEFAULT_MIN_TASKS: usize = 1;
/// The default largest number of tasks in a generated file.
pub const DEFAULT_MAX_TASKS: usize = 1 << 4;
/// The default upper bound of `max_cpu_time`.
pub const DEFAULT_MAX_CPU_TIME: u64 = 1 << 20;
/// The default cap of `cpu_burst_len`.
pub const DEFAULT_CPU_BURST_CAP: u64 = 1 << 16;
/// The default upper bound of `io_burst_len`.
pub const DEFAULT_MAX_IO_BURST_LEN: u64 = 1 << 11;
/// The default upper bound of `weight`.
pub const DEFAULT_MAX_WEIGHT: u32 = 1 << 5;

/// The scheduler simulator numbers tasks with 16-bit identifiers.
pub const MAX_TASKS: usize = u16::MAX as usize;

////////////////////////////////////////////////////////////////////////////////
// Field ranges.
////////////////////////////////////////////////////////////////////////////////

/// The ranges each field of a task descriptor is sampled from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRanges {
    pub max_cpu_time: RangeInclusive<u64>,
    /// The upper bound is a cap; see the module documentation.
    pub cpu_burst_len: RangeInclusive<u64>,
    pub io_burst_len: RangeInclusive<u64>,
    pub weight: RangeInclusive<u32>,
}

impl Default for FieldRanges {
    fn default() -> Self {
        FieldRanges {
            max_cpu_time: 1..=DEFAULT_MAX_CPU_TIME,
            cpu_burst_len: 1..=DEFAULT_CPU_BURST_CAP,
            io_burst_len: 0..=DEFAULT_MAX_IO_BURST_LEN,
            weight: 1..=DEFAULT_MAX_WEIGHT,
        }
    }
}

impl FieldRanges {
    /// The range `cpu_burst_len` is sampled from once `max_cpu_time` is
    /// known.
    #[inline]
    pub fn cpu_burst_len_for(&self, max_cpu_time: u64) -> RangeInclusive<u64> {
        *self.cpu_burst_len.start()..=(*self.cpu_burst_len.end()).min(max_cpu_time)
    }

    /// Checks that every field can be sampled from, whatever `max_cpu_time`
    /// turns out to be.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        non_empty("max_cpu_time", &self.max_cpu_time)?;
        non_empty("cpu_burst_len", &self.cpu_burst_len)?;
        non_empty("io_burst_len", &self.io_burst_len)?;
        non_empty("weight", &self.weight)?;

        if *self.max_cpu_time.start() == 0 {
            return Err(GeneratorError::InvalidRange(String::from(
                "max_cpu_time must be at least 1",
            )));
        }
        if *self.cpu_burst_len.start() == 0 {
            return Err(GeneratorError::InvalidRange(String::from(
                "cpu_burst_len must be at least 1",
            )));
        }
        if *self.weight.start() == 0 {
            return Err(GeneratorError::InvalidRange(String::from(
                "weight must be at least 1",
            )));
        }
        if self.cpu_burst_len.start() > self.max_cpu_time.start() {
            return Err(GeneratorError::InvalidRange(format!(
                "cpu_burst_len lower bound {} exceeds the smallest max_cpu_time {}",
                self.cpu_burst_len.start(),
                self.max_cpu_time.start()
            )));
        }

        Ok(())
    }
}

fn non_empty<T: PartialOrd + std::fmt::Debug>(
    name: &str,
    range: &RangeInclusive<T>,
) -> Result<(), GeneratorError> {
    if range.is_empty() {
        Err(GeneratorError::InvalidRange(format!(
            "{} range {:?} is empty",
            name, range
        )))
    } else {
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Generation parameters.
////////////////////////////////////////////////////////////////////////////////

/// Everything needed to sample a task file: how many tasks, and what each
/// task looks like.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameters {
    pub count: RangeInclusive<usize>,
    pub fields: FieldRanges,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            count: DEFAULT_MIN_TASKS..=DEFAULT_MAX_TASKS,
            fields: FieldRanges::default(),
        }
    }
}

impl Parameters {
    /// Creates parameters with the default field ranges and the given task
    /// count range.
    #[inline]
    pub fn with_count(count: RangeInclusive<usize>) -> Self {
        Parameters {
            count,
            fields: FieldRanges::default(),
        }
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        non_empty("count", &self.count)?;

        if *self.count.start() == 0 {
            return Err(GeneratorError::InvalidRange(String::from(
                "at least one task must be generated",
            )));
        }
        if *self.count.end() > MAX_TASKS {
            return Err(GeneratorError::InvalidRange(format!(
                "at most {} tasks can be numbered by the scheduler",
                MAX_TASKS
            )));
        }

        self.fields.validate()
    }
}
