//! Stepwise traversal: each value is directly adjacent to the last.
//!
//! After each selection the distribution vector is zeroed and weight 1
//! is set on the eligible neighbour(s); at a range boundary only the
//! single in-range neighbour is eligible.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct AdjacentSteps {
    range: Range,
    generator: DiscreteGenerator,
    initial_selection: Option<i64>,
    last: Option<i64>,
}

impl AdjacentSteps {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            generator: DiscreteGenerator::new(range.size(), 1.0),
            initial_selection: None,
            last: None,
        }
    }

    pub fn with_initial_selection(range: Range, initial_selection: i64) -> ProtocolResult<Self> {
        if !range.contains(initial_selection) {
            return Err(ProtocolError::InvalidArgument(format!(
                "initial selection {initial_selection} is outside the range [{}, {}]",
                range.start, range.end
            )));
        }
        let mut steps = Self::new(range);
        steps.initial_selection = Some(initial_selection);
        Ok(steps)
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if self.last.is_none() {
            if let Some(initial) = self.initial_selection {
                self.last = Some(initial);
                self.prepare_step_distribution(initial)?;
                return Ok(initial);
            }
        }
        let index = self.generator.draw(rng)?;
        let value = self.range.value_at(index);
        self.last = Some(value);
        self.prepare_step_distribution(value)?;
        Ok(value)
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(self.range, ProtocolParams::AdjacentSteps)
    }

    pub(crate) fn set_range(&mut self, range: Range) -> ProtocolResult<()> {
        self.range = range;
        self.generator.set_distribution(range.size(), 1.0);
        match self.last {
            Some(value) if range.contains(value) => self.prepare_step_distribution(value),
            _ => {
                self.last = None;
                Ok(())
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.generator.set_all(1.0);
    }

    /// Arm the neighbour(s) of `value` for the next draw.
    fn prepare_step_distribution(&mut self, value: i64) -> ProtocolResult<()> {
        let index = self.range.index_of(value);
        self.generator.set_all(0.0);
        if self.range.size() == 1 {
            return self.generator.update_weight(index, 1.0);
        }
        if value == self.range.start {
            self.generator.update_weight(index + 1, 1.0)
        } else if value == self.range.end {
            self.generator.update_weight(index - 1, 1.0)
        } else {
            self.generator.update_weight(index + 1, 1.0)?;
            self.generator.update_weight(index - 1, 1.0)
        }
    }
}
