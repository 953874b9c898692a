//! Sources of randomness
//!
//! The generator never reaches for a process-wide random number generator:
//! every sample is drawn from a `RandomSource` passed in by the caller.  Any
//! `rand::Rng` is a `RandomSource`, so a seeded `StdRng` gives reproducible
//! fixtures and `thread_rng()` gives fresh ones.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

use rand::Rng;
use std::ops::RangeInclusive;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a value drawn uniformly from `range`, which is never empty.
    fn sample_u64(&mut self, range: RangeInclusive<u64>) -> u64;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn sample_u64(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..32 {
            assert_eq!(
                first.sample_u64(1..=1 << 20),
                second.sample_u64(1..=1 << 20)
            );
        }
    }

    #[test]
    fn rng_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let sample = rng.sample_u64(3..=9);
            assert!((3..=9).contains(&sample));
        }
        assert_eq!(rng.sample_u64(5..=5), 5);
    }
}
