//! Task descriptors
//!
//! A task descriptor is the unit of workload handed to the scheduler
//! simulator.  Its textual form is a single line of four space-separated
//! integers, in the fixed order `max_cpu_time cpu_burst_len io_burst_len
//! weight`.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use crate::{error::GeneratorError, ranges::FieldRanges};
use std::{fmt, str::FromStr};

/// The number of whitespace-separated fields in a task descriptor line.
pub const FIELD_COUNT: usize = 4;

/// The workload parameters of one simulated task.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TaskDescriptor {
    /// Total CPU time the task may consume.
    max_cpu_time: u64,
    /// Length of one CPU burst.
    cpu_burst_len: u64,
    /// Length of one I/O burst.
    io_burst_len: u64,
    /// Scheduling weight of the task.
    weight: u32,
}

impl TaskDescriptor {
    /// Creates a new descriptor.  No range checking is done here; see
    /// `check()`.
    #[inline]
    pub fn new(max_cpu_time: u64, cpu_burst_len: u64, io_burst_len: u64, weight: u32) -> Self {
        TaskDescriptor {
            max_cpu_time,
            cpu_burst_len,
            io_burst_len,
            weight,
        }
    }

    /// Gets the total CPU time the task may consume.
    #[inline]
    pub fn get_max_cpu_time(&self) -> u64 {
        self.max_cpu_time
    }

    /// Gets the length of one CPU burst.
    #[inline]
    pub fn get_cpu_burst_len(&self) -> u64 {
        self.cpu_burst_len
    }

    /// Gets the length of one I/O burst.
    #[inline]
    pub fn get_io_burst_len(&self) -> u64 {
        self.io_burst_len
    }

    /// Gets the scheduling weight.
    #[inline]
    pub fn get_weight(&self) -> u32 {
        self.weight
    }

    /// Returns `true` iff every field lies within `ranges`, and the CPU burst
    /// is no longer than the total CPU time.
    pub fn check(&self, ranges: &FieldRanges) -> bool {
        ranges.max_cpu_time.contains(&self.max_cpu_time)
            && ranges.cpu_burst_len.contains(&self.cpu_burst_len)
            && self.cpu_burst_len <= self.max_cpu_time
            && ranges.io_burst_len.contains(&self.io_burst_len)
            && ranges.weight.contains(&self.weight)
    }

    /// Builds a descriptor from the first four fields of a line.
    pub(crate) fn from_fields(fields: &[&str; FIELD_COUNT]) -> Result<Self, GeneratorError> {
        let max_cpu_time = parse_field::<u64>("max_cpu_time", fields[0])?;
        let cpu_burst_len = parse_field::<u64>("cpu_burst_len", fields[1])?;
        let io_burst_len = parse_field::<u64>("io_burst_len", fields[2])?;
        let weight = parse_field::<u32>("weight", fields[3])?;

        Ok(TaskDescriptor::new(
            max_cpu_time,
            cpu_burst_len,
            io_burst_len,
            weight,
        ))
    }
}

fn parse_field<T>(name: &str, value: &str) -> Result<T, GeneratorError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| {
        GeneratorError::MalformedDescriptor(format!("field '{}' ('{}'): {}", name, value, err))
    })
}

/// The line format consumed by the scheduler simulator, without the
/// terminating newline.
impl fmt::Display for TaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.max_cpu_time, self.cpu_burst_len, self.io_burst_len, self.weight
        )
    }
}

/// Parses exactly four whitespace-separated integers.
impl FromStr for TaskDescriptor {
    type Err = GeneratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let fields = value.split_whitespace().collect::<Vec<_>>();

        match fields.as_slice() {
            [a, b, c, d] => TaskDescriptor::from_fields(&[*a, *b, *c, *d]),
            _ => Err(GeneratorError::MalformedDescriptor(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_field_order() {
        let descriptor = TaskDescriptor::new(500000, 1000, 200, 7);
        assert_eq!(descriptor.to_string(), "500000 1000 200 7");
    }

    #[test]
    fn parse_accepts_extra_whitespace() {
        let descriptor: TaskDescriptor = "  12\t3 0   9 ".parse().unwrap();
        assert_eq!(descriptor, TaskDescriptor::new(12, 3, 0, 9));
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert!(matches!(
            "1 2 3".parse::<TaskDescriptor>(),
            Err(GeneratorError::MalformedDescriptor(_))
        ));
        assert!(matches!(
            "1 2 3 4 5".parse::<TaskDescriptor>(),
            Err(GeneratorError::MalformedDescriptor(_))
        ));
    }

    #[test]
    fn parse_rejects_negative_and_oversized_fields() {
        assert!("1 2 -3 4".parse::<TaskDescriptor>().is_err());
        assert!("1 2 3 4294967296".parse::<TaskDescriptor>().is_err());
        assert!("x 2 3 4".parse::<TaskDescriptor>().is_err());
    }

    #[test]
    fn check_enforces_default_ranges() {
        let ranges = FieldRanges::default();

        assert!(TaskDescriptor::new(1, 1, 0, 1).check(&ranges));
        assert!(TaskDescriptor::new(1 << 20, 1 << 16, 1 << 11, 1 << 5).check(&ranges));

        assert!(!TaskDescriptor::new(0, 1, 0, 1).check(&ranges));
        assert!(!TaskDescriptor::new((1 << 20) + 1, 1, 0, 1).check(&ranges));
        assert!(!TaskDescriptor::new(1 << 20, (1 << 16) + 1, 0, 1).check(&ranges));
        assert!(!TaskDescriptor::new(1 << 20, 1, (1 << 11) + 1, 1).check(&ranges));
        assert!(!TaskDescriptor::new(1 << 20, 1, 0, 0).check(&ranges));
        assert!(!TaskDescriptor::new(1 << 20, 1, 0, 33).check(&ranges));
    }

    #[test]
    fn check_rejects_burst_longer_than_cpu_time() {
        assert!(!TaskDescriptor::new(10, 11, 0, 1).check(&FieldRanges::default()));
    }
}
