//! Bounded random walk: each value lies within max-step of the last.
//!
//! The sub-range `[last - maxStep, last + maxStep]` is clipped to the
//! main range; traversal does not wrap.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::UniformGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct Walk {
    range: Range,
    generator: UniformGenerator,
    max_step: i64,
    initial_selection: Option<i64>,
    last: Option<i64>,
}

impl Walk {
    pub fn new(range: Range, max_step: i64) -> ProtocolResult<Self> {
        check_max_step(range, max_step)?;
        Ok(Self {
            range,
            generator: UniformGenerator::new(range.start, range.end),
            max_step,
            initial_selection: None,
            last: None,
        })
    }

    /// Default configuration: single-step walk.
    pub(crate) fn default_over(range: Range) -> Self {
        Self {
            range,
            generator: UniformGenerator::new(range.start, range.end),
            max_step: 1,
            initial_selection: None,
            last: None,
        }
    }

    pub fn with_initial_selection(
        range: Range,
        max_step: i64,
        initial_selection: i64,
    ) -> ProtocolResult<Self> {
        if !range.contains(initial_selection) {
            return Err(ProtocolError::InvalidArgument(format!(
                "initial selection {initial_selection} is outside the range [{}, {}]",
                range.start, range.end
            )));
        }
        let mut walk = Self::new(range, max_step)?;
        walk.initial_selection = Some(initial_selection);
        Ok(walk)
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if self.last.is_none() {
            if let Some(initial) = self.initial_selection {
                self.last = Some(initial);
                self.move_sub_range(initial);
                return Ok(initial);
            }
        }
        let value = self.generator.draw(rng);
        self.last = Some(value);
        self.move_sub_range(value);
        Ok(value)
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::Walk {
                max_step: self.max_step,
            },
        )
    }

    pub(crate) fn set_params(&mut self, range: Range, max_step: i64) -> ProtocolResult<()> {
        check_max_step(range, max_step)?;
        self.range = range;
        self.max_step = max_step;
        match self.last {
            Some(value) if range.contains(value) => self.move_sub_range(value),
            _ => {
                self.last = None;
                self.generator.set_distribution(range.start, range.end);
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.generator.set_distribution(self.range.start, self.range.end);
    }

    fn move_sub_range(&mut self, around: i64) {
        let lo = (around - self.max_step).max(self.range.start);
        let hi = (around + self.max_step).min(self.range.end);
        self.generator.set_distribution(lo, hi);
    }
}

fn check_max_step(range: Range, max_step: i64) -> ProtocolResult<()> {
    if max_step < 1 || max_step > range.size() as i64 {
        return Err(ProtocolError::InvalidArgument(format!(
            "max step {max_step} must be within [1, {}] for a range of size {}",
            range.size(),
            range.size()
        )));
    }
    Ok(())
}
