//! Uniform selection with the last drawn value excluded.

use crate::error::ProtocolResult;
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct NoRepetition {
    range: Range,
    generator: DiscreteGenerator,
}

impl NoRepetition {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            generator: DiscreteGenerator::new(range.size(), 1.0),
        }
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        let index = self.generator.draw(rng)?;
        // Restore the previous exclusion, then exclude the new selection
        // for the next draw only.
        self.generator.set_all(1.0);
        self.generator.update_weight(index, 0.0)?;
        Ok(self.range.value_at(index))
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(self.range, ProtocolParams::NoRepetition)
    }

    pub(crate) fn set_range(&mut self, range: Range) -> ProtocolResult<()> {
        self.range = range;
        self.generator.set_distribution(range.size(), 1.0);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.generator.set_all(1.0);
    }
}
