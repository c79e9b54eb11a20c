//! Seedable simulation RNG.
//!
//! Every random draw in a batch goes through one `SimRng` passed in by the
//! caller.  Tests seed it with a constant and get identical batches; the
//! dashboard seeds it from OS entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Batch-level RNG wrapper around `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Use for production runs where
    /// reproducibility is not wanted.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Generate a value uniformly in `range`.  Inclusive ranges include both
    /// endpoints.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
