//! Deterministic random sources
//!
//! `ScriptedSource` replays a fixed list of samples, so that a test (here, or
//! in a consumer of task files) can pin down exactly which tasks are
//! generated.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use crate::source::RandomSource;
use std::{collections::VecDeque, ops::RangeInclusive};

/// Hands out a fixed sequence of samples, checking each against the range it
/// was requested for.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    samples: VecDeque<u64>,
}

impl ScriptedSource {
    /// Creates a source replaying `samples` in order.
    pub fn new(samples: &[u64]) -> Self {
        ScriptedSource {
            samples: samples.iter().copied().collect(),
        }
    }

    /// Returns `true` iff every sample has been handed out.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.samples.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    /// # Panics
    ///
    /// Panics if the script has run out, or if the next sample lies outside
    /// `range`.
    fn sample_u64(&mut self, range: RangeInclusive<u64>) -> u64 {
        let sample = match self.samples.pop_front() {
            Some(sample) => sample,
            None => panic!("scripted source ran out of samples"),
        };
        assert!(
            range.contains(&sample),
            "scripted sample {} outside requested range {:?}",
            sample,
            range
        );
        sample
    }
}
