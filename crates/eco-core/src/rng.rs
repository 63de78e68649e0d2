//! Deterministic RNG for simulated collaborators.
//!
//! The decision engine never draws random numbers.  Randomness belongs to
//! test doubles and simulated environments, which must still be
//! reproducible: the same seed and key always produce the same stream.
//!
//!   seed = global_seed XOR (key * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive keys uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GeoPoint;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded `SmallRng` derived from a global seed and a key.
pub struct SeededRng(SmallRng);

impl SeededRng {
    /// Seed from the run's global seed and an arbitrary 64-bit key.
    pub fn keyed(global_seed: u64, key: u64) -> Self {
        let seed = global_seed ^ key.wrapping_mul(MIXING_CONSTANT);
        SeededRng(SmallRng::seed_from_u64(seed))
    }

    /// One stream per (location, timestamp) pair, so sampling the same pair
    /// twice yields the same values.  Coordinates are quantised to ~1 m.
    pub fn for_sample(global_seed: u64, location: GeoPoint, timestamp: i64) -> Self {
        let lat = (location.lat * 1e5).round() as i64 as u64;
        let lon = (location.lon * 1e5).round() as i64 as u64;
        let key = lat
            .wrapping_mul(MIXING_CONSTANT)
            .rotate_left(17)
            ^ lon.wrapping_mul(MIXING_CONSTANT).rotate_left(31)
            ^ timestamp as u64;
        Self::keyed(global_seed, key)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
