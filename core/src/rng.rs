//! Deterministic random number generation.
//!
//! RULE: Nothing in the crate may call any platform RNG directly.
//! All randomness flows through a RandomEngine constructed once by
//! the caller and passed `&mut` into every drawing call, so a seeded
//! run is fully reproducible.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::error::{ProtocolError, ProtocolResult};

/// The process-wide uniform random source behind every generator.
pub struct RandomEngine {
    inner: Pcg64Mcg,
}

impl RandomEngine {
    /// Create an engine with a seed drawn from the thread RNG.
    pub fn new() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Create a fully deterministic engine. Two engines built from the
    /// same seed produce identical draw sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Uniformly distributed integer in `[lo, hi]` inclusive.
    pub fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.inner.gen_range(lo..=hi)
    }

    /// Uniformly distributed real in `[lo, hi]` inclusive.
    pub fn uniform_real(&mut self, lo: f64, hi: f64) -> f64 {
        self.inner.gen_range(lo..=hi)
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Draw an index with probability proportional to its weight.
    /// An all-zero weight vector is a programming-contract violation
    /// on the caller's side and surfaces as `InvalidState`.
    pub fn weighted_index(&mut self, weights: &[f64]) -> ProtocolResult<usize> {
        let dist = WeightedIndex::new(weights).map_err(|e| match e {
            WeightedError::AllWeightsZero => ProtocolError::InvalidState(
                "weighted draw attempted over an all-zero distribution vector".into(),
            ),
            other => ProtocolError::InvalidState(format!("weighted draw failed: {other}")),
        })?;
        Ok(dist.sample(&mut self.inner))
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}
