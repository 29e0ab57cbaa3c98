//! The protocol family: twelve constraint strategies behind one closed
//! enum.
//!
//! Dispatch is an exhaustive `match`, so adding a variant forces every
//! call site to handle it at compile time. Every protocol owns its own
//! generator state; draws advance that state and nothing is shared
//! between instances.

mod adjacent_steps;
mod basic;
mod cycle;
mod granular_walk;
mod grouped_repetition;
mod no_repetition;
mod periodic;
mod precision;
mod ratio;
mod serial;
mod subset;
mod walk;

pub use adjacent_steps::AdjacentSteps;
pub use basic::Basic;
pub use cycle::Cycle;
pub use granular_walk::GranularWalk;
pub use grouped_repetition::GroupedRepetition;
pub use no_repetition::NoRepetition;
pub use periodic::Periodic;
pub use precision::Precision;
pub use ratio::Ratio;
pub use serial::Serial;
pub use subset::Subset;
pub use walk::Walk;

use crate::error::{ProtocolError, ProtocolResult};
use crate::params::{ProtocolConfig, ProtocolKind, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

/// One stateful constraint strategy for producing the next value from a
/// range.
pub enum NumberProtocol {
    Basic(Basic),
    Cycle(Cycle),
    Serial(Serial),
    NoRepetition(NoRepetition),
    Periodic(Periodic),
    AdjacentSteps(AdjacentSteps),
    Walk(Walk),
    GranularWalk(GranularWalk),
    Ratio(Ratio),
    Precision(Precision),
    Subset(Subset),
    GroupedRepetition(GroupedRepetition),
}

impl NumberProtocol {
    /// Create a protocol of the given kind with its default parameters
    /// over the default range `[0, 1]`.
    pub fn create(kind: ProtocolKind) -> Self {
        Self::with_defaults(kind, Range { start: 0, end: 1 })
    }

    /// Create a protocol of the given kind with its default parameters
    /// over `range`. Defaults are always internally consistent, so this
    /// cannot fail.
    pub fn with_defaults(kind: ProtocolKind, range: Range) -> Self {
        match kind {
            ProtocolKind::Basic => Self::Basic(Basic::new(range)),
            ProtocolKind::Cycle => Self::Cycle(Cycle::new(range, false, false)),
            ProtocolKind::Serial => Self::Serial(Serial::new(range)),
            ProtocolKind::NoRepetition => Self::NoRepetition(NoRepetition::new(range)),
            ProtocolKind::Periodic => Self::Periodic(Periodic::default_over(range)),
            ProtocolKind::AdjacentSteps => Self::AdjacentSteps(AdjacentSteps::new(range)),
            ProtocolKind::Walk => Self::Walk(Walk::default_over(range)),
            ProtocolKind::GranularWalk => Self::GranularWalk(GranularWalk::default_over(range)),
            ProtocolKind::Ratio => Self::Ratio(Ratio::default_over(range)),
            ProtocolKind::Precision => Self::Precision(Precision::default_over(range)),
            ProtocolKind::Subset => Self::Subset(Subset::default_over(range)),
            ProtocolKind::GroupedRepetition => {
                Self::GroupedRepetition(GroupedRepetition::default_over(range))
            }
        }
    }

    /// Construct a protocol from a full configuration, validating the
    /// parameter set against the range.
    pub fn from_config(config: ProtocolConfig) -> ProtocolResult<Self> {
        let range = config.range;
        match config.params {
            ProtocolParams::Basic => Ok(Self::Basic(Basic::new(range))),
            ProtocolParams::Cycle {
                bidirectional,
                reverse_direction,
            } => Ok(Self::Cycle(Cycle::new(range, bidirectional, reverse_direction))),
            ProtocolParams::Serial => Ok(Self::Serial(Serial::new(range))),
            ProtocolParams::NoRepetition => Ok(Self::NoRepetition(NoRepetition::new(range))),
            ProtocolParams::Periodic {
                chance_of_repetition,
            } => Ok(Self::Periodic(Periodic::new(range, chance_of_repetition)?)),
            ProtocolParams::AdjacentSteps => Ok(Self::AdjacentSteps(AdjacentSteps::new(range))),
            ProtocolParams::Walk { max_step } => Ok(Self::Walk(Walk::new(range, max_step)?)),
            ProtocolParams::GranularWalk { deviation_factor } => Ok(Self::GranularWalk(
                GranularWalk::new(range, deviation_factor)?,
            )),
            ProtocolParams::Ratio { ratios } => Ok(Self::Ratio(Ratio::new(range, ratios)?)),
            ProtocolParams::Precision { distribution } => {
                Ok(Self::Precision(Precision::new(range, distribution)?))
            }
            ProtocolParams::Subset { min, max } => Ok(Self::Subset(Subset::new(range, min, max)?)),
            ProtocolParams::GroupedRepetition { groupings } => Ok(Self::GroupedRepetition(
                GroupedRepetition::new(range, groupings)?,
            )),
        }
    }

    pub fn kind(&self) -> ProtocolKind {
        match self {
            Self::Basic(_) => ProtocolKind::Basic,
            Self::Cycle(_) => ProtocolKind::Cycle,
            Self::Serial(_) => ProtocolKind::Serial,
            Self::NoRepetition(_) => ProtocolKind::NoRepetition,
            Self::Periodic(_) => ProtocolKind::Periodic,
            Self::AdjacentSteps(_) => ProtocolKind::AdjacentSteps,
            Self::Walk(_) => ProtocolKind::Walk,
            Self::GranularWalk(_) => ProtocolKind::GranularWalk,
            Self::Ratio(_) => ProtocolKind::Ratio,
            Self::Precision(_) => ProtocolKind::Precision,
            Self::Subset(_) => ProtocolKind::Subset,
            Self::GroupedRepetition(_) => ProtocolKind::GroupedRepetition,
        }
    }

    /// Produce the next integer value, always advancing protocol state.
    pub fn next_int(&mut self, rng: &mut RandomEngine) -> ProtocolResult<i64> {
        match self {
            Self::Basic(p) => p.next_int(rng),
            Self::Cycle(p) => p.next_int(rng),
            Self::Serial(p) => p.next_int(rng),
            Self::NoRepetition(p) => p.next_int(rng),
            Self::Periodic(p) => p.next_int(rng),
            Self::AdjacentSteps(p) => p.next_int(rng),
            Self::Walk(p) => p.next_int(rng),
            Self::GranularWalk(p) => p.next_int(rng),
            Self::Ratio(p) => p.next_int(rng),
            Self::Precision(p) => p.next_int(rng),
            Self::Subset(p) => p.next_int(rng),
            Self::GroupedRepetition(p) => p.next_int(rng),
        }
    }

    /// Produce the next decimal value, always advancing protocol state.
    /// Discrete protocols return their integer selection as a real;
    /// GranularWalk produces values with a fractional part.
    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        match self {
            Self::Basic(p) => p.next_decimal(rng),
            Self::Cycle(p) => p.next_decimal(rng),
            Self::Serial(p) => p.next_decimal(rng),
            Self::NoRepetition(p) => p.next_decimal(rng),
            Self::Periodic(p) => p.next_decimal(rng),
            Self::AdjacentSteps(p) => p.next_decimal(rng),
            Self::Walk(p) => p.next_decimal(rng),
            Self::GranularWalk(p) => p.next_decimal(rng),
            Self::Ratio(p) => p.next_decimal(rng),
            Self::Precision(p) => p.next_decimal(rng),
            Self::Subset(p) => p.next_decimal(rng),
            Self::GroupedRepetition(p) => p.next_decimal(rng),
        }
    }

    /// The protocol's current configuration.
    pub fn params(&self) -> ProtocolConfig {
        match self {
            Self::Basic(p) => p.params(),
            Self::Cycle(p) => p.params(),
            Self::Serial(p) => p.params(),
            Self::NoRepetition(p) => p.params(),
            Self::Periodic(p) => p.params(),
            Self::AdjacentSteps(p) => p.params(),
            Self::Walk(p) => p.params(),
            Self::GranularWalk(p) => p.params(),
            Self::Ratio(p) => p.params(),
            Self::Precision(p) => p.params(),
            Self::Subset(p) => p.params(),
            Self::GroupedRepetition(p) => p.params(),
        }
    }

    /// Apply a new configuration. The parameter set's tag must match
    /// the receiving variant and the parameters must be internally
    /// consistent; validation completes before any state mutation.
    pub fn set_params(&mut self, config: ProtocolConfig) -> ProtocolResult<()> {
        match (self, &config.params) {
            (Self::Basic(p), ProtocolParams::Basic) => p.set_range(config.range),
            (
                Self::Cycle(p),
                ProtocolParams::Cycle {
                    bidirectional,
                    reverse_direction,
                },
            ) => p.set_params(config.range, *bidirectional, *reverse_direction),
            (Self::Serial(p), ProtocolParams::Serial) => p.set_range(config.range),
            (Self::NoRepetition(p), ProtocolParams::NoRepetition) => p.set_range(config.range),
            (
                Self::Periodic(p),
                ProtocolParams::Periodic {
                    chance_of_repetition,
                },
            ) => p.set_params(config.range, *chance_of_repetition),
            (Self::AdjacentSteps(p), ProtocolParams::AdjacentSteps) => p.set_range(config.range),
            (Self::Walk(p), ProtocolParams::Walk { max_step }) => {
                p.set_params(config.range, *max_step)
            }
            (Self::GranularWalk(p), ProtocolParams::GranularWalk { deviation_factor }) => {
                p.set_params(config.range, *deviation_factor)
            }
            (Self::Ratio(p), ProtocolParams::Ratio { ratios }) => {
                p.set_params(config.range, ratios)
            }
            (Self::Precision(p), ProtocolParams::Precision { distribution }) => {
                p.set_params(config.range, distribution)
            }
            (Self::Subset(p), ProtocolParams::Subset { min, max }) => {
                p.set_params(config.range, *min, *max)
            }
            (Self::GroupedRepetition(p), ProtocolParams::GroupedRepetition { groupings }) => {
                p.set_params(config.range, groupings)
            }
            (receiver, params) => Err(ProtocolError::InvalidArgument(format!(
                "parameter set is for the {} protocol but the active protocol is {}",
                params.kind(),
                receiver.kind()
            ))),
        }
    }

    /// Return to the initial condition: history cleared, any configured
    /// initial selection re-armed, series passes restarted.
    pub fn reset(&mut self) {
        match self {
            Self::Basic(p) => p.reset(),
            Self::Cycle(p) => p.reset(),
            Self::Serial(p) => p.reset(),
            Self::NoRepetition(p) => p.reset(),
            Self::Periodic(p) => p.reset(),
            Self::AdjacentSteps(p) => p.reset(),
            Self::Walk(p) => p.reset(),
            Self::GranularWalk(p) => p.reset(),
            Self::Ratio(p) => p.reset(),
            Self::Precision(p) => p.reset(),
            Self::Subset(p) => p.reset(),
            Self::GroupedRepetition(p) => p.reset(),
        }
    }

    /// Replace the range and return the variant to its default
    /// parameters. Used by the producer layer when a target's size
    /// changes; discarding the custom parameters is the documented
    /// contract there.
    pub fn set_range_with_defaults(&mut self, range: Range) {
        *self = Self::with_defaults(self.kind(), range);
    }
}

impl From<Basic> for NumberProtocol {
    fn from(p: Basic) -> Self {
        Self::Basic(p)
    }
}

impl From<Cycle> for NumberProtocol {
    fn from(p: Cycle) -> Self {
        Self::Cycle(p)
    }
}

impl From<Serial> for NumberProtocol {
    fn from(p: Serial) -> Self {
        Self::Serial(p)
    }
}

impl From<NoRepetition> for NumberProtocol {
    fn from(p: NoRepetition) -> Self {
        Self::NoRepetition(p)
    }
}

impl From<Periodic> for NumberProtocol {
    fn from(p: Periodic) -> Self {
        Self::Periodic(p)
    }
}

impl From<AdjacentSteps> for NumberProtocol {
    fn from(p: AdjacentSteps) -> Self {
        Self::AdjacentSteps(p)
    }
}

impl From<Walk> for NumberProtocol {
    fn from(p: Walk) -> Self {
        Self::Walk(p)
    }
}

impl From<GranularWalk> for NumberProtocol {
    fn from(p: GranularWalk) -> Self {
        Self::GranularWalk(p)
    }
}

impl From<Ratio> for NumberProtocol {
    fn from(p: Ratio) -> Self {
        Self::Ratio(p)
    }
}

impl From<Precision> for NumberProtocol {
    fn from(p: Precision) -> Self {
        Self::Precision(p)
    }
}

impl From<Subset> for NumberProtocol {
    fn from(p: Subset) -> Self {
        Self::Subset(p)
    }
}

impl From<GroupedRepetition> for NumberProtocol {
    fn from(p: GroupedRepetition) -> Self {
        Self::GroupedRepetition(p)
    }
}
