//! Unconstrained uniform selection over the whole range.

use crate::error::ProtocolResult;
use crate::generator::UniformGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct Basic {
    range: Range,
    generator: UniformGenerator,
}

impl Basic {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            generator: UniformGenerator::new(range.start, range.end),
        }
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        Ok(self.generator.draw(rng))
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(self.range, ProtocolParams::Basic)
    }

    pub(crate) fn set_range(&mut self, range: Range) -> ProtocolResult<()> {
        self.range = range;
        self.generator.set_distribution(range.start, range.end);
        Ok(())
    }

    pub fn reset(&mut self) {}
}
