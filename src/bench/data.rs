use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value range of the benchmark sequences.
pub const VALUE_RANGE: RangeInclusive<i32> = -1_000_000..=1_000_000;

/// Deterministic data generator seeded for reproducible benchmarks.
#[derive(Debug)]
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` values uniformly distributed over `range`.
    pub fn uniform_i32(&mut self, count: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        (0..count)
            .map(|_| self.rng.random_range(range.clone()))
            .collect()
    }

    pub fn sequence(&mut self, count: usize) -> Vec<i32> {
        self.uniform_i32(count, VALUE_RANGE)
    }
}
