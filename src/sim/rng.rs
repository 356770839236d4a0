//! Seeded randomness for the simulation
//!
//! One PCG stream per session keeps the whole run reproducible from a seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Session-scoped random source
#[derive(Debug, Clone)]
pub struct SessionRng {
    inner: Pcg32,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform integer in the half-open range `[0, bound)`
    pub fn below(&mut self, bound: u32) -> u32 {
        self.inner.random_range(0..bound)
    }

    /// Uniformly pick one element of a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u32) as usize]
    }
}
