//! Scheduler task fixture generator
//!
//! Replaces `tasks.txt` in the working directory with a random number of
//! randomly sampled task descriptors, one per line.
//!
//! # Example
//! ```
//! cargo run -- --seed [RANDOM_SEED]
//! ```
//!
//! By default a previous `tasks.txt` must exist; pass `--truncate` to create
//! the file when it is missing.
//!
//! # AUTHORS
//!
//! The Veracruz Development Team.
//!
//! # COPYRIGHT
//!
//! See the `LICENSE.md` file in the root directory for licensing
//! and copyright information.

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use task_generator::{generate, OutputMode, Parameters, DEFAULT_OUTPUT_FILENAME};

////////////////////////////////////////////////////////////////////////////////
// Constants.
////////////////////////////////////////////////////////////////////////////////

/// About the utility.
const ABOUT: &str = "A utility for generating random scheduler workloads: \
replaces `tasks.txt` with between 1 and 16 task descriptors.";
/// The name of the application.
const APPLICATION_NAME: &str = "task-generator";
/// The authors list.
const AUTHORS: &str = "The Veracruz Development Team.";
/// The application's version information.
const VERSION: &str = "0.3.0";

////////////////////////////////////////////////////////////////////////////////
// Command line parsing.
////////////////////////////////////////////////////////////////////////////////

/// A structure collating all of the arguments passed to the executable.
#[derive(Debug, Parser)]
#[command(name = APPLICATION_NAME, author = AUTHORS, version = VERSION, about = ABOUT, long_about = None, rename_all = "kebab-case")]
struct Arguments {
    /// The seed for the random number generator.  Fresh entropy is used if
    /// omitted.
    #[arg(long, short = 's', value_name = "NUMBER")]
    seed: Option<u64>,
    /// Create `tasks.txt` if it does not exist, instead of failing.
    #[arg(long, short = 't')]
    truncate: bool,
}

impl Arguments {
    fn output_mode(&self) -> OutputMode {
        if self.truncate {
            OutputMode::Truncate
        } else {
            OutputMode::Strict
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                info!("Seeding random number generator with {}.", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Entry point.
////////////////////////////////////////////////////////////////////////////////

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Reading command line parameters.");
    let arguments = Arguments::parse();

    let mut rng = arguments.rng();
    let tasks = generate(
        DEFAULT_OUTPUT_FILENAME,
        &Parameters::default(),
        arguments.output_mode(),
        &mut rng,
    )?;

    info!("Generated {} tasks.", tasks.len());
    Ok(())
}
