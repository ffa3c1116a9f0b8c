// src/generators/random.rs
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers.
///
/// Both bounds are inclusive. Implementations must return `min` when
/// `min == max`.
pub trait RandomSource {
    fn uniform_int(&mut self, min: u64, max: u64) -> u64;

    /// Pick an index into a collection of `len` items. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        self.uniform_int(0, len as u64 - 1) as usize
    }
}

// Thread-local RNG, the default for generated passwords
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform_int(&mut self, min: u64, max: u64) -> u64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

// Reproducible sequence from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, min: u64, max: u64) -> u64 {
        self.rng.gen_range(min..=max)
    }
}
