//! Exhaustive permutation: every value once before any repeats.

use crate::error::ProtocolResult;
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;
use crate::series;

#[derive(Debug, Clone)]
pub struct Serial {
    range: Range,
    generator: DiscreteGenerator,
}

impl Serial {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            generator: DiscreteGenerator::new(range.size(), 1.0),
        }
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if series::is_complete(&self.generator) {
            series::reset(&mut self.generator);
        }
        let index = series::draw(&mut self.generator, rng)?;
        Ok(self.range.value_at(index))
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(self.range, ProtocolParams::Serial)
    }

    pub(crate) fn set_range(&mut self, range: Range) -> ProtocolResult<()> {
        self.range = range;
        self.generator.set_distribution(range.size(), 1.0);
        Ok(())
    }

    pub fn reset(&mut self) {
        series::reset(&mut self.generator);
    }
}
