//! Repeat the last value with a configured probability, otherwise pick
//! uniformly from the rest of the range.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct Periodic {
    range: Range,
    generator: DiscreteGenerator,
    chance_of_repetition: f64,
    initial_selection: Option<i64>,
    last: Option<i64>,
}

impl Periodic {
    pub fn new(range: Range, chance_of_repetition: f64) -> ProtocolResult<Self> {
        check_chance(chance_of_repetition)?;
        Ok(Self {
            range,
            generator: DiscreteGenerator::new(range.size(), 1.0),
            chance_of_repetition,
            initial_selection: None,
            last: None,
        })
    }

    /// Default configuration: an even chance of repetition.
    pub(crate) fn default_over(range: Range) -> Self {
        Self {
            range,
            generator: DiscreteGenerator::new(range.size(), 1.0),
            chance_of_repetition: 0.5,
            initial_selection: None,
            last: None,
        }
    }

    pub fn with_initial_selection(
        range: Range,
        chance_of_repetition: f64,
        initial_selection: i64,
    ) -> ProtocolResult<Self> {
        check_initial_selection(range, initial_selection)?;
        let mut periodic = Self::new(range, chance_of_repetition)?;
        periodic.initial_selection = Some(initial_selection);
        Ok(periodic)
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if self.last.is_none() {
            if let Some(initial) = self.initial_selection {
                self.last = Some(initial);
                self.bias_towards(self.range.index_of(initial))?;
                return Ok(initial);
            }
        }
        let index = self.generator.draw(rng)?;
        let value = self.range.value_at(index);
        self.last = Some(value);
        self.bias_towards(index)?;
        Ok(value)
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::Periodic {
                chance_of_repetition: self.chance_of_repetition,
            },
        )
    }

    pub(crate) fn set_params(
        &mut self,
        range: Range,
        chance_of_repetition: f64,
    ) -> ProtocolResult<()> {
        check_chance(chance_of_repetition)?;
        self.range = range;
        self.chance_of_repetition = chance_of_repetition;
        self.generator.set_distribution(range.size(), 1.0);
        match self.last {
            Some(value) if range.contains(value) => {
                self.bias_towards(range.index_of(value))?;
            }
            _ => self.last = None,
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.generator.set_all(1.0);
    }

    /// Weight the last selection at the chance of repetition and share
    /// the remainder equally across the other values.
    fn bias_towards(&mut self, index: usize) -> ProtocolResult<()> {
        let size = self.range.size();
        if size == 1 {
            self.generator.set_all(1.0);
            return Ok(());
        }
        let remainder = (1.0 - self.chance_of_repetition) / (size - 1) as f64;
        self.generator.set_all(remainder);
        self.generator.update_weight(index, self.chance_of_repetition)
    }
}

fn check_chance(chance: f64) -> ProtocolResult<()> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(ProtocolError::InvalidArgument(format!(
            "chance of repetition {chance} must be within [0.0, 1.0]"
        )));
    }
    Ok(())
}

fn check_initial_selection(range: Range, initial_selection: i64) -> ProtocolResult<()> {
    if !range.contains(initial_selection) {
        return Err(ProtocolError::InvalidArgument(format!(
            "initial selection {initial_selection} is outside the range [{}, {}]",
            range.start, range.end
        )));
    }
    Ok(())
}
