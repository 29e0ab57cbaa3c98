//! Uniform selection restricted to a bounded subset of the range.
//!
//! The active subset is chosen lazily before the first draw (its size
//! picked uniformly within the configured bounds, its members drawn
//! without replacement from the full range) and re-chosen on reset or
//! reconfiguration.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;
use crate::series;

#[derive(Debug, Clone)]
pub struct Subset {
    range: Range,
    min: usize,
    max: usize,
    generator: DiscreteGenerator,
    subset: Vec<i64>,
}

impl Subset {
    pub fn new(range: Range, min: usize, max: usize) -> ProtocolResult<Self> {
        check_bounds(range, min, max)?;
        Ok(Self {
            range,
            min,
            max,
            generator: DiscreteGenerator::new(range.size(), 1.0),
            subset: Vec::new(),
        })
    }

    /// Default configuration: the subset may be anything from a single
    /// value up to the whole range.
    pub(crate) fn default_over(range: Range) -> Self {
        Self {
            range,
            min: 1,
            max: range.size(),
            generator: DiscreteGenerator::new(range.size(), 1.0),
            subset: Vec::new(),
        }
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if self.subset.is_empty() {
            self.choose_subset(rng)?;
        }
        let pick = rng.uniform_int(0, self.subset.len() as i64 - 1) as usize;
        Ok(self.subset[pick])
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::Subset {
                min: self.min,
                max: self.max,
            },
        )
    }

    pub(crate) fn set_params(&mut self, range: Range, min: usize, max: usize) -> ProtocolResult<()> {
        check_bounds(range, min, max)?;
        self.range = range;
        self.min = min;
        self.max = max;
        self.generator.set_distribution(range.size(), 1.0);
        self.subset.clear();
        Ok(())
    }

    pub fn reset(&mut self) {
        series::reset(&mut self.generator);
        self.subset.clear();
    }

    /// Pick a subset size within the bounds, then fill the subset by
    /// drawing distinct values from the full range.
    fn choose_subset(&mut self, rng: &mut RandomEngine) -> ProtocolResult<()> {
        let size = rng.uniform_int(self.min as i64, self.max as i64) as usize;
        series::reset(&mut self.generator);
        self.subset.clear();
        for _ in 0..size {
            let index = series::draw(&mut self.generator, rng)?;
            self.subset.push(self.range.value_at(index));
        }
        Ok(())
    }
}

fn check_bounds(range: Range, min: usize, max: usize) -> ProtocolResult<()> {
    if min < 1 || min > max || max > range.size() {
        return Err(ProtocolError::InvalidArgument(format!(
            "subset bounds [{min}, {max}] must satisfy 1 <= min <= max <= {}",
            range.size()
        )));
    }
    Ok(())
}
