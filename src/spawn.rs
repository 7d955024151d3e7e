//! Obstacle placement
//!
//! The obstacle picks a fresh horizontal position every time it respawns.
//! That choice goes through [`SpawnSource`] so the game can run on a real
//! RNG while tests feed exact positions.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of obstacle x positions
pub trait SpawnSource {
    /// Returns an x in `0..=max_x`
    fn next_x(&mut self, max_x: i32) -> i32;
}

/// Uniform spawn positions drawn from any `rand` generator
pub struct RngSpawner<R> {
    rng: R,
}

impl<R: Rng> RngSpawner<R> {
    pub fn new(rng: R) -> Self {
        RngSpawner { rng }
    }
}

impl RngSpawner<Pcg32> {
    /// Reproducible spawner; the same seed yields the same obstacle lanes
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl<R: Rng> SpawnSource for RngSpawner<R> {
    fn next_x(&mut self, max_x: i32) -> i32 {
        self.rng.random_range(0..=max_x.max(0))
    }
}
