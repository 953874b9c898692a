//! Scheduler task fixture generator
//!
//! Produces synthetic workloads for a scheduler simulator: a plain text file
//! with one task descriptor per line, each line holding four space-separated
//! base-10 integers:
//!
//! ```text
//! <max_cpu_time> <cpu_burst_len> <io_burst_len> <weight>
//! ```
//!
//! The number of tasks and each of the four fields are sampled uniformly from
//! bounded ranges (see [`ranges`]), using a caller-supplied
//! [`source::RandomSource`] so that fixtures can be reproduced from a seed.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

/// Task descriptors, and their textual representation.
pub mod descriptor;
/// Error types for generating and reading task files.
pub mod error;
/// Generating a task file end to end.
pub mod generator;
/// Preparing the output file and serializing descriptors into it.
pub mod output;
/// Sampling ranges for the task count and descriptor fields.
pub mod ranges;
/// Reading a task file back, the way the scheduler simulator does.
pub mod reader;
/// Sources of randomness.
pub mod source;
/// Scripted random sources for deterministic tests.
pub mod testing;

pub use descriptor::TaskDescriptor;
pub use error::GeneratorError;
pub use generator::{generate, sample_count, sample_descriptor, sample_tasks};
pub use output::{create_exclusive, prepare_output, write_descriptors, OutputMode};
pub use ranges::{FieldRanges, Parameters};
pub use reader::{parse_tasks, read_tasks, TaskRecord};
pub use source::RandomSource;

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// The filename the scheduler simulator reads its workload from, relative to
/// the working directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "tasks.txt";
