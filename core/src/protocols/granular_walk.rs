//! Continuous bounded walk producing values with a fractional part.
//!
//! The caller supplies a deviation factor in [0, 1]; the absolute
//! max-step is derived as `factor * (end - start)`. After every draw
//! the uniform sub-range is recentred on the drawn value and clipped to
//! the main range.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::UniformRealGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct GranularWalk {
    range: Range,
    generator: UniformRealGenerator,
    deviation_factor: f64,
    max_step: f64,
    initial_selection: Option<f64>,
    last: Option<f64>,
}

impl GranularWalk {
    pub fn new(range: Range, deviation_factor: f64) -> ProtocolResult<Self> {
        check_deviation_factor(deviation_factor)?;
        Ok(Self {
            range,
            generator: UniformRealGenerator::new(range.start as f64, range.end as f64),
            deviation_factor,
            max_step: deviation_factor * range.span() as f64,
            initial_selection: None,
            last: None,
        })
    }

    /// Default configuration: the sub-range spans the whole range.
    pub(crate) fn default_over(range: Range) -> Self {
        Self {
            range,
            generator: UniformRealGenerator::new(range.start as f64, range.end as f64),
            deviation_factor: 1.0,
            max_step: range.span() as f64,
            initial_selection: None,
            last: None,
        }
    }

    pub fn with_initial_selection(
        range: Range,
        deviation_factor: f64,
        initial_selection: i64,
    ) -> ProtocolResult<Self> {
        if !range.contains(initial_selection) {
            return Err(ProtocolError::InvalidArgument(format!(
                "initial selection {initial_selection} is outside the range [{}, {}]",
                range.start, range.end
            )));
        }
        let mut walk = Self::new(range, deviation_factor)?;
        walk.initial_selection = Some(initial_selection as f64);
        Ok(walk)
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
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

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        Ok(self.next_decimal(rng)?.round() as i64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::GranularWalk {
                deviation_factor: self.deviation_factor,
            },
        )
    }

    pub(crate) fn set_params(&mut self, range: Range, deviation_factor: f64) -> ProtocolResult<()> {
        check_deviation_factor(deviation_factor)?;
        self.range = range;
        self.deviation_factor = deviation_factor;
        self.max_step = deviation_factor * range.span() as f64;
        match self.last {
            Some(value) if range.contains_f64(value) => self.move_sub_range(value),
            _ => {
                self.last = None;
                self.generator
                    .set_distribution(range.start as f64, range.end as f64);
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.generator
            .set_distribution(self.range.start as f64, self.range.end as f64);
    }

    fn move_sub_range(&mut self, around: f64) {
        let lo = (around - self.max_step).max(self.range.start as f64);
        let hi = (around + self.max_step).min(self.range.end as f64);
        self.generator.set_distribution(lo, hi);
    }
}

fn check_deviation_factor(factor: f64) -> ProtocolResult<()> {
    if !(0.0..=1.0).contains(&factor) {
        return Err(ProtocolError::InvalidArgument(format!(
            "deviation factor {factor} must be within [0.0, 1.0]"
        )));
    }
    Ok(())
}
