//! Generating task files
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
    descriptor::TaskDescriptor,
    error::GeneratorError,
    output::{prepare_output, write_descriptors, OutputMode},
    ranges::{FieldRanges, Parameters},
    source::RandomSource,
};
use log::{debug, info};
use std::path::Path;

////////////////////////////////////////////////////////////////////////////////
// Sampling.
////////////////////////////////////////////////////////////////////////////////

/// Samples the number of tasks to generate.  Fails with
/// `GeneratorError::InvalidRange` if `parameters` cannot be sampled from.
pub fn sample_count<S: RandomSource + ?Sized>(
    parameters: &Parameters,
    source: &mut S,
) -> Result<usize, GeneratorError> {
    parameters.validate()?;
    Ok(draw_count(parameters, source))
}

/// Samples one task descriptor.  Fields are drawn in file order, with the CPU
/// burst range narrowed by the CPU time drawn just before it.  Fails with
/// `GeneratorError::InvalidRange` if `ranges` cannot be sampled from.
pub fn sample_descriptor<S: RandomSource + ?Sized>(
    ranges: &FieldRanges,
    source: &mut S,
) -> Result<TaskDescriptor, GeneratorError> {
    ranges.validate()?;
    Ok(draw_descriptor(ranges, source))
}

/// Samples a task count, then that many descriptors.  Fails with
/// `GeneratorError::InvalidRange` if `parameters` cannot be sampled from.
pub fn sample_tasks<S: RandomSource + ?Sized>(
    parameters: &Parameters,
    source: &mut S,
) -> Result<Vec<TaskDescriptor>, GeneratorError> {
    parameters.validate()?;
    Ok(draw_tasks(parameters, source))
}

// The `draw_*` functions expect validated ranges: `rand` panics on an empty
// range.

fn draw_count<S: RandomSource + ?Sized>(parameters: &Parameters, source: &mut S) -> usize {
    let start = *parameters.count.start() as u64;
    let end = *parameters.count.end() as u64;

    source.sample_u64(start..=end) as usize
}

fn draw_descriptor<S: RandomSource + ?Sized>(ranges: &FieldRanges, source: &mut S) -> TaskDescriptor {
    let max_cpu_time = source.sample_u64(ranges.max_cpu_time.clone());
    let cpu_burst_len = source.sample_u64(ranges.cpu_burst_len_for(max_cpu_time));
    let io_burst_len = source.sample_u64(ranges.io_burst_len.clone());
    let weight = source.sample_u64(
        u64::from(*ranges.weight.start())..=u64::from(*ranges.weight.end()),
    ) as u32;

    TaskDescriptor::new(max_cpu_time, cpu_burst_len, io_burst_len, weight)
}

fn draw_tasks<S: RandomSource + ?Sized>(parameters: &Parameters, source: &mut S) -> Vec<TaskDescriptor> {
    let count = draw_count(parameters, source);
    info!("Generating {} tasks.", count);

    let mut tasks = Vec::with_capacity(count);

    for _ in 0..count {
        let task = draw_descriptor(&parameters.fields, source);
        debug!("Generated task: {}.", task);
        tasks.push(task);
    }

    tasks
}

////////////////////////////////////////////////////////////////////////////////
// Generation.
////////////////////////////////////////////////////////////////////////////////

/// Replaces the task file at `output_path` with a freshly sampled one, and
/// returns the descriptors written, in file order.
///
/// In `OutputMode::Strict` a previous file must exist: it is removed, and the
/// new file is created exclusively.  Fails with
/// `GeneratorError::MissingTarget` if there is nothing to remove, in which case
/// no file is created, and with `GeneratorError::TargetExists` if a file
/// reappears before creation.  Parameters are validated before the file
/// system is touched.
pub fn generate<P, S>(
    output_path: P,
    parameters: &Parameters,
    mode: OutputMode,
    source: &mut S,
) -> Result<Vec<TaskDescriptor>, GeneratorError>
where
    P: AsRef<Path>,
    S: RandomSource + ?Sized,
{
    let output_path = output_path.as_ref();
    parameters.validate()?;

    let file = prepare_output(output_path, mode)?;
    let tasks = draw_tasks(parameters, source);

    write_descriptors(file, &tasks)?;
    info!(
        "Wrote {} tasks to output file: '{}'.",
        tasks.len(),
        output_path.display()
    );

    Ok(tasks)
}
