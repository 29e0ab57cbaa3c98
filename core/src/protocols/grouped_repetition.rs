//! Distinct values emitted in repeated groups.
//!
//! One without-replacement pass selects which value comes next; a second
//! pass over the groupings list selects how many times it is repeated.
//! Each pass resets independently on its own completion.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;
use crate::series;

#[derive(Debug, Clone)]
pub struct GroupedRepetition {
    range: Range,
    groupings: Vec<usize>,
    value_generator: DiscreteGenerator,
    grouping_generator: DiscreteGenerator,
    current: Option<i64>,
    remaining: usize,
}

impl GroupedRepetition {
    pub fn new(range: Range, groupings: Vec<usize>) -> ProtocolResult<Self> {
        check_groupings(&groupings)?;
        let value_generator = DiscreteGenerator::new(range.size(), 1.0);
        let grouping_generator = DiscreteGenerator::new(groupings.len(), 1.0);
        Ok(Self {
            range,
            groupings,
            value_generator,
            grouping_generator,
            current: None,
            remaining: 0,
        })
    }

    /// Default configuration: single-repetition groups.
    pub(crate) fn default_over(range: Range) -> Self {
        Self {
            range,
            groupings: vec![1],
            value_generator: DiscreteGenerator::new(range.size(), 1.0),
            grouping_generator: DiscreteGenerator::new(1, 1.0),
            current: None,
            remaining: 0,
        }
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if self.remaining == 0 {
            if series::is_complete(&self.grouping_generator) {
                series::reset(&mut self.grouping_generator);
            }
            let grouping_index = series::draw(&mut self.grouping_generator, rng)?;
            self.remaining = self.groupings[grouping_index];

            if series::is_complete(&self.value_generator) {
                series::reset(&mut self.value_generator);
            }
            let value_index = series::draw(&mut self.value_generator, rng)?;
            self.current = Some(self.range.value_at(value_index));
        }
        self.remaining -= 1;
        self.current.ok_or_else(|| {
            ProtocolError::InvalidState("grouped repetition has no current value".into())
        })
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::GroupedRepetition {
                groupings: self.groupings.clone(),
            },
        )
    }

    pub(crate) fn set_params(&mut self, range: Range, groupings: &[usize]) -> ProtocolResult<()> {
        check_groupings(groupings)?;
        self.range = range;
        self.groupings = groupings.to_vec();
        self.value_generator.set_distribution(range.size(), 1.0);
        self.grouping_generator
            .set_distribution(self.groupings.len(), 1.0);
        self.current = None;
        self.remaining = 0;
        Ok(())
    }

    pub fn reset(&mut self) {
        series::reset(&mut self.value_generator);
        series::reset(&mut self.grouping_generator);
        self.current = None;
        self.remaining = 0;
    }
}

fn check_groupings(groupings: &[usize]) -> ProtocolResult<()> {
    if groupings.is_empty() {
        return Err(ProtocolError::InvalidArgument(
            "the groupings collection must not be empty".into(),
        ));
    }
    if groupings.iter().any(|g| *g == 0) {
        return Err(ProtocolError::InvalidArgument(
            "every grouping must be at least one repetition".into(),
        ));
    }
    Ok(())
}
