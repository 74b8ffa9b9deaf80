//! Pluggable randomness for number synthesis
//!
//! The generator only ever asks for a uniform index below some bound, so the
//! seam is a single method. Production code wraps a `rand` RNG; tests script
//! exact draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a value in `0..upper`. `upper` is always at least 1.
    fn next_below(&mut self, upper: usize) -> usize;

    /// Draw one decimal digit.
    fn next_digit(&mut self) -> u8 {
        self.next_below(10) as u8
    }
}

/// [`RandomSource`] backed by any `rand` RNG.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper.max(1))
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_below(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % upper.max(1)
    }
}
