//! Duration protocols and the durations producer.
//!
//! A duration protocol computes one duration (in milliseconds) per
//! index rather than storing caller elements, so the producer contract
//! mirrors the collections producer over a computed address space.

use crate::error::{ProtocolError, ProtocolResult};
use crate::params::ProtocolConfig;
use crate::protocols::NumberProtocol;
use crate::range::Range;
use crate::rng::RandomEngine;

/// The contract a duration protocol fulfils towards the producer:
/// report its element count and compute one value by index.
pub trait DurationProtocol {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn duration_at(&self, index: usize, rng: &mut RandomEngine) -> ProtocolResult<i64>;
}

/// Fixed playback of a caller-supplied duration list.
#[derive(Debug, Clone)]
pub struct Prescribed {
    durations: Vec<i64>,
}

impl Prescribed {
    pub fn new(durations: Vec<i64>) -> Self {
        Self { durations }
    }
}

impl DurationProtocol for Prescribed {
    fn len(&self) -> usize {
        self.durations.len()
    }

    fn duration_at(&self, index: usize, _rng: &mut RandomEngine) -> ProtocolResult<i64> {
        self.durations
            .get(index)
            .copied()
            .ok_or(ProtocolError::OutOfRange {
                index,
                len: self.durations.len(),
            })
    }
}

/// Integer multiples of a base increment, with an optional deviation
/// factor that jitters each computed duration uniformly within
/// `value ± value * factor`.
#[derive(Debug, Clone)]
pub struct Multiples {
    base_increment: i64,
    multipliers: Vec<i64>,
    deviation_factor: Option<f64>,
}

impl Multiples {
    /// Multipliers taken from every value in `range`.
    pub fn new(base_increment: i64, range: Range) -> Self {
        Self {
            base_increment,
            multipliers: (range.start..=range.end).collect(),
            deviation_factor: None,
        }
    }

    pub fn with_deviation(
        base_increment: i64,
        range: Range,
        deviation_factor: f64,
    ) -> ProtocolResult<Self> {
        check_deviation_factor(deviation_factor)?;
        let mut multiples = Self::new(base_increment, range);
        multiples.deviation_factor = Some(deviation_factor);
        Ok(multiples)
    }

    /// Multipliers supplied explicitly.
    pub fn from_multipliers(base_increment: i64, multipliers: Vec<i64>) -> Self {
        Self {
            base_increment,
            multipliers,
            deviation_factor: None,
        }
    }

    pub fn from_multipliers_with_deviation(
        base_increment: i64,
        multipliers: Vec<i64>,
        deviation_factor: f64,
    ) -> ProtocolResult<Self> {
        check_deviation_factor(deviation_factor)?;
        Ok(Self {
            base_increment,
            multipliers,
            deviation_factor: Some(deviation_factor),
        })
    }
}

impl DurationProtocol for Multiples {
    fn len(&self) -> usize {
        self.multipliers.len()
    }

    fn duration_at(&self, index: usize, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        let multiplier = self
            .multipliers
            .get(index)
            .copied()
            .ok_or(ProtocolError::OutOfRange {
                index,
                len: self.multipliers.len(),
            })?;
        let value = self.base_increment * multiplier;
        match self.deviation_factor {
            Some(factor) => {
                let deviation = value as f64 * factor;
                let jittered = rng.uniform_real(value as f64 - deviation, value as f64 + deviation);
                Ok(jittered.round() as i64)
            }
            None => Ok(value),
        }
    }
}

/// A geometric sequence of `n` terms between the range bounds: the
/// common ratio is `(end / start)^(1 / (n - 1))` and term `i` is
/// `start * ratio^i`, rounded.
#[derive(Debug, Clone)]
pub struct Geometric {
    terms: Vec<i64>,
}

impl Geometric {
    pub fn new(range: Range, collection_size: usize) -> ProtocolResult<Self> {
        if range.start <= 0 {
            return Err(ProtocolError::InvalidArgument(format!(
                "a geometric sequence needs a positive range start, got {}",
                range.start
            )));
        }
        if collection_size < 2 {
            return Err(ProtocolError::InvalidArgument(format!(
                "a geometric sequence needs at least two terms, got {collection_size}"
            )));
        }
        let ratio =
            (range.end as f64 / range.start as f64).powf(1.0 / (collection_size - 1) as f64);
        let terms = (0..collection_size)
            .map(|i| (range.start as f64 * ratio.powi(i as i32)).round() as i64)
            .collect();
        Ok(Self { terms })
    }
}

impl DurationProtocol for Geometric {
    fn len(&self) -> usize {
        self.terms.len()
    }

    fn duration_at(&self, index: usize, _rng: &mut RandomEngine) -> ProtocolResult<i64> {
        self.terms
            .get(index)
            .copied()
            .ok_or(ProtocolError::OutOfRange {
                index,
                len: self.terms.len(),
            })
    }
}

/// Producer over a duration protocol's computed address space. Same
/// contract as the collections producer: the number protocol's range is
/// always `[0, len - 1]`, a size-changing duration-protocol swap resets
/// the number protocol to its defaults, a same-size swap preserves its
/// parameters.
pub struct DurationsProducer {
    duration_protocol: Box<dyn DurationProtocol>,
    protocol: NumberProtocol,
}

impl DurationsProducer {
    pub fn new(
        duration_protocol: Box<dyn DurationProtocol>,
        mut protocol: NumberProtocol,
    ) -> ProtocolResult<Self> {
        check_target_size(duration_protocol.len())?;
        protocol.set_range_with_defaults(target_range(duration_protocol.len()));
        Ok(Self {
            duration_protocol,
            protocol,
        })
    }

    pub fn get_duration(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        let selected = self.protocol.next_int(rng)?;
        let offset = self.protocol.params().range.offset();
        self.duration_protocol
            .duration_at((selected - offset) as usize, rng)
    }

    pub fn get_collection(
        &mut self,
        count: usize,
        rng: &mut RandomEngine,
    ) -> ProtocolResult<Vec<i64>> {
        (0..count).map(|_| self.get_duration(rng)).collect()
    }

    pub fn get_params(&self) -> ProtocolConfig {
        self.protocol.params()
    }

    pub fn set_params(&mut self, config: ProtocolConfig) -> ProtocolResult<()> {
        self.protocol.set_params(config)
    }

    /// Replace the active number protocol. Its range is forced to the
    /// duration protocol's size and its parameters reset to defaults.
    pub fn set_number_protocol(&mut self, mut protocol: NumberProtocol) {
        protocol.set_range_with_defaults(target_range(self.duration_protocol.len()));
        log::debug!("durations producer: protocol changed to {}", protocol.kind());
        self.protocol = protocol;
    }

    /// Replace the duration protocol. A target smaller than two is
    /// rejected and the previous one kept.
    pub fn set_duration_protocol(
        &mut self,
        duration_protocol: Box<dyn DurationProtocol>,
    ) -> ProtocolResult<()> {
        check_target_size(duration_protocol.len())?;
        if duration_protocol.len() != self.duration_protocol.len() {
            log::debug!(
                "durations producer: target size changed from {} to {}, protocol reset to defaults",
                self.duration_protocol.len(),
                duration_protocol.len()
            );
            self.protocol
                .set_range_with_defaults(target_range(duration_protocol.len()));
        }
        self.duration_protocol = duration_protocol;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.protocol.reset();
    }
}

fn target_range(len: usize) -> Range {
    Range {
        start: 0,
        end: len as i64 - 1,
    }
}

fn check_target_size(len: usize) -> ProtocolResult<()> {
    if len < 2 {
        return Err(ProtocolError::InvalidArgument(
            "the duration protocol provided is too small; it must hold two or more durations"
                .into(),
        ));
    }
    Ok(())
}

fn check_deviation_factor(factor: f64) -> ProtocolResult<()> {
    if !(0.0..=1.0).contains(&factor) {
        return Err(ProtocolError::InvalidArgument(format!(
            "deviation factor {factor} must be within [0.0, 1.0]"
        )));
    }
    Ok(())
}
