//! Seeded random sampling helpers

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::metrics::round_to;

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Random source threaded through every generation stage
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Integer in `[min, max)`, i.e. `floor(U(min, max))`
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Non-negative integer in `[min, max)`
    pub fn count(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Score in `[min, max)` on the 0-100 scale
    pub fn score(&mut self, min: u8, max: u8) -> u8 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Real in `[min, max)` rounded to `decimals`
    pub fn decimal(&mut self, min: f64, max: f64, decimals: u32) -> f64 {
        if max <= min {
            return round_to(min, decimals);
        }
        round_to(self.rng.gen_range(min..max), decimals)
    }

    /// Bernoulli draw
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Uniform pick from a fixed, non-empty set
    pub fn pick<T: Copy, const N: usize>(&mut self, items: &[T; N]) -> T {
        items[self.rng.gen_range(0..N)]
    }

    /// Uniform index into a collection of `len` items, `None` when empty
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Instant uniformly within the `days_back` days before `now`
    pub fn date_within(&mut self, now: DateTime<Utc>, days_back: f64) -> DateTime<Utc> {
        let offset = self.rng.gen::<f64>() * days_back * MILLIS_PER_DAY;
        now - Duration::milliseconds(offset as i64)
    }
}
