//! Randomness for the rave effects
//!
//! Visual noise only: the sequence is not meant to be reproducible across
//! runs, and it is not suitable for anything security related.

use rand::{Rng as _, SeedableRng, rngs::SmallRng};

/// Seeded small generator with the draws the rave modes need
#[derive(Debug, Clone)]
pub struct Rng {
    inner: SmallRng,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[0, 1)`
    pub fn next_f32(&mut self) -> f32 {
        self.inner.random()
    }

    /// Uniform integer in `[0, bound)`; `0` when `bound` is zero
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.inner.random_range(0..bound)
    }

    /// Uniform hue in `[0, 360)` degrees
    pub fn hue(&mut self) -> f32 {
        self.next_f32() * 360.0
    }

    /// `true` with probability `p`
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}
