//! Injectable random source
//!
//! The only randomness on the table is the ball's launch jitter. It goes
//! through [`RandomSource`] so tests can pin it down.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniformly distributed floats
pub trait RandomSource {
    /// Returns a value in `[min, max]`. Returns `min` when the range is empty.
    fn next_float(&mut self, min: f32, max: f32) -> f32;
}

/// Default source backed by a seeded PCG generator
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg32,
}

impl PcgSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgSource {
    fn next_float(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        if !(max - min).is_finite() {
            // Span overflows f32, blend the endpoints instead
            let t: f32 = self.rng.random();
            return min * (1.0 - t) + max * t;
        }
        self.rng.random_range(min..=max)
    }
}

/// Always yields the same fraction of the requested range
///
/// `FixedSource(0.5)` gives the midpoint, `FixedSource(0.0)` the minimum.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f32);

impl RandomSource for FixedSource {
    fn next_float(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        min + (max - min) * self.0.clamp(0.0, 1.0)
    }
}
