//! Sampling primitives: the weighted distribution vector and uniform spans.
//!
//! A protocol never holds a second copy of its weights. The vector is
//! owned by one DiscreteGenerator and mutated only through its API, so
//! the weights in force are always the weights that will be drawn from.

use crate::error::{ProtocolError, ProtocolResult};
use crate::rng::RandomEngine;

/// A mutable non-negative weight per index, drawn with probability
/// proportional to weight. Zero-weight entries are excluded; at least
/// one entry must be non-zero at draw time.
#[derive(Debug, Clone)]
pub struct DiscreteGenerator {
    weights: Vec<f64>,
}

impl DiscreteGenerator {
    pub fn new(size: usize, initial_weight: f64) -> Self {
        Self {
            weights: vec![initial_weight; size],
        }
    }

    pub fn with_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Replace the vector with `size` entries of `weight`.
    pub fn set_distribution(&mut self, size: usize, weight: f64) {
        self.weights = vec![weight; size];
    }

    /// Set every entry to `weight`, keeping the current length.
    pub fn set_all(&mut self, weight: f64) {
        for w in &mut self.weights {
            *w = weight;
        }
    }

    pub fn update_weight(&mut self, index: usize, weight: f64) -> ProtocolResult<()> {
        let len = self.weights.len();
        match self.weights.get_mut(index) {
            Some(w) => {
                *w = weight;
                Ok(())
            }
            None => Err(ProtocolError::OutOfRange { index, len }),
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Pure selection primitive: draws an index, mutates nothing.
    pub fn draw(&self, rng: &mut RandomEngine) -> ProtocolResult<usize> {
        rng.weighted_index(&self.weights)
    }
}

/// Uniform integer draws over a resettable inclusive span.
#[derive(Debug, Clone, Copy)]
pub struct UniformGenerator {
    lo: i64,
    hi: i64,
}

impl UniformGenerator {
    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn set_distribution(&mut self, lo: i64, hi: i64) {
        self.lo = lo;
        self.hi = hi;
    }

    pub fn draw(&self, rng: &mut RandomEngine) -> i64 {
        rng.uniform_int(self.lo, self.hi)
    }
}

/// Uniform real draws over a resettable inclusive span.
#[derive(Debug, Clone, Copy)]
pub struct UniformRealGenerator {
    lo: f64,
    hi: f64,
}

impl UniformRealGenerator {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn set_distribution(&mut self, lo: f64, hi: f64) {
        self.lo = lo;
        self.hi = hi;
    }

    pub fn draw(&self, rng: &mut RandomEngine) -> f64 {
        rng.uniform_real(self.lo, self.hi)
    }
}
