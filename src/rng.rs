//! Randomness behind the race loop.
//!
//! The engine never reaches for `thread_rng()`; it draws through
//! [`RandomSource`] so a seeded [`SimRng`] replays the same race, and tests
//! can script every draw.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform draw from an inclusive range.
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seedable ChaCha8 source.
pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for SimRng {
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.gen_range(range)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
