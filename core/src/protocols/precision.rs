//! Static weighted selection from a caller-supplied distribution.

use crate::error::{ProtocolError, ProtocolResult};
use crate::generator::DiscreteGenerator;
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct Precision {
    range: Range,
    generator: DiscreteGenerator,
    distribution: Vec<f64>,
    initial_selection: Option<i64>,
    have_produced: bool,
}

impl Precision {
    pub fn new(range: Range, distribution: Vec<f64>) -> ProtocolResult<Self> {
        check_distribution(range, &distribution)?;
        let generator = DiscreteGenerator::with_weights(distribution.clone());
        Ok(Self {
            range,
            generator,
            distribution,
            initial_selection: None,
            have_produced: false,
        })
    }

    /// Default configuration: a uniform distribution.
    pub(crate) fn default_over(range: Range) -> Self {
        let distribution = vec![1.0 / range.size() as f64; range.size()];
        Self {
            range,
            generator: DiscreteGenerator::with_weights(distribution.clone()),
            distribution,
            initial_selection: None,
            have_produced: false,
        }
    }

    pub fn with_initial_selection(
        range: Range,
        distribution: Vec<f64>,
        initial_selection: i64,
    ) -> ProtocolResult<Self> {
        if !range.contains(initial_selection) {
            return Err(ProtocolError::InvalidArgument(format!(
                "initial selection {initial_selection} is outside the range [{}, {}]",
                range.start, range.end
            )));
        }
        let mut precision = Self::new(range, distribution)?;
        precision.initial_selection = Some(initial_selection);
        Ok(precision)
    }

    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        if !self.have_produced {
            self.have_produced = true;
            if let Some(initial) = self.initial_selection {
                return Ok(initial);
            }
        }
        let index = self.generator.draw(rng)?;
        Ok(self.range.value_at(index))
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::Precision {
                distribution: self.distribution.clone(),
            },
        )
    }

    pub(crate) fn set_params(&mut self, range: Range, distribution: &[f64]) -> ProtocolResult<()> {
        check_distribution(range, distribution)?;
        self.range = range;
        self.distribution = distribution.to_vec();
        self.generator = DiscreteGenerator::with_weights(self.distribution.clone());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.have_produced = false;
    }
}

fn check_distribution(range: Range, distribution: &[f64]) -> ProtocolResult<()> {
    if distribution.len() != range.size() {
        return Err(ProtocolError::InvalidArgument(format!(
            "the distribution has {} entries but the range holds {} values",
            distribution.len(),
            range.size()
        )));
    }
    if distribution.iter().any(|w| *w < 0.0) {
        return Err(ProtocolError::InvalidArgument(
            "distribution weights must be non-negative".into(),
        ));
    }
    if distribution.iter().all(|w| *w == 0.0) {
        return Err(ProtocolError::InvalidArgument(
            "at least one distribution weight must be greater than zero".into(),
        ));
    }
    Ok(())
}
