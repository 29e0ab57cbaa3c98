//! Weighted exhaustion: each value appears its ratio's number of times
//! per series pass.
//!
//! The ratios are expanded into a flat "selectables" list (one entry per
//! occurrence) and a without-replacement pass runs over that list, so a
//! full pass of length sum(ratios) contains each value exactly its
//! ratio's number of times.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;
use crate::series;

#[derive(Debug, Clone)]
pub struct Ratio {
    range: Range,
    ratios: Vec<u32>,
    selectables: Vec<i64>,
    generator: DiscreteGenerator,
}

impl Ratio {
    pub fn new(range: Range, ratios: Vec<u32>) -> ProtocolResult<Self> {
        check_ratios(range, &ratios)?;
        let selectables = expand_selectables(range, &ratios);
        let generator = DiscreteGenerator::new(selectables.len(), 1.0);
        Ok(Self {
            range,
            ratios,
            selectables,
            generator,
        })
    }

    /// Default configuration: every value weighted equally.
    pub(crate) fn default_over(range: Range) -> Self {
        let ratios = vec![1; range.size()];
        let selectables = expand_selectables(range, &ratios);
        let generator = DiscreteGenerator::new(selectables.len(), 1.0);
        Self {
            range,
            ratios,
            selectables,
            generator,
        }
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if series::is_complete(&self.generator) {
            series::reset(&mut self.generator);
        }
        let index = series::draw(&mut self.generator, rng)?;
        Ok(self.selectables[index])
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::Ratio {
                ratios: self.ratios.clone(),
            },
        )
    }

    pub(crate) fn set_params(&mut self, range: Range, ratios: &[u32]) -> ProtocolResult<()> {
        check_ratios(range, ratios)?;
        self.range = range;
        self.ratios = ratios.to_vec();
        self.selectables = expand_selectables(range, ratios);
        self.generator.set_distribution(self.selectables.len(), 1.0);
        Ok(())
    }

    pub fn reset(&mut self) {
        series::reset(&mut self.generator);
    }
}

fn check_ratios(range: Range, ratios: &[u32]) -> ProtocolResult<()> {
    if ratios.len() != range.size() {
        return Err(ProtocolError::InvalidArgument(format!(
            "the ratios collection has {} entries but the range holds {} values",
            ratios.len(),
            range.size()
        )));
    }
    if ratios.iter().all(|r| *r == 0) {
        return Err(ProtocolError::InvalidArgument(
            "at least one ratio must be greater than zero".into(),
        ));
    }
    Ok(())
}

fn expand_selectables(range: Range, ratios: &[u32]) -> Vec<i64> {
    let mut selectables = Vec::with_capacity(ratios.iter().sum::<u32>() as usize);
    for (index, ratio) in ratios.iter().enumerate() {
        for _ in 0..*ratio {
            selectables.push(range.value_at(index));
        }
    }
    selectables
}
