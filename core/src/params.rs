//! Protocol configuration value types.
//!
//! A `ProtocolConfig` carries a range plus one tagged parameter set.
//! `set_params` on a protocol rejects a parameter set whose tag does
//! not match the receiving variant, so the tag doubles as the wire
//! identity of a protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::range::Range;

/// Bare variant tag for a number protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolKind {
    Basic,
    Cycle,
    Serial,
    NoRepetition,
    Periodic,
    AdjacentSteps,
    Walk,
    GranularWalk,
    Ratio,
    Precision,
    Subset,
    GroupedRepetition,
}

impl ProtocolKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Cycle => "cycle",
            Self::Serial => "serial",
            Self::NoRepetition => "no_repetition",
            Self::Periodic => "periodic",
            Self::AdjacentSteps => "adjacent_steps",
            Self::Walk => "walk",
            Self::GranularWalk => "granular_walk",
            Self::Ratio => "ratio",
            Self::Precision => "precision",
            Self::Subset => "subset",
            Self::GroupedRepetition => "grouped_repetition",
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Protocol-specific parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "snake_case")]
pub enum ProtocolParams {
    Basic,
    Cycle {
        bidirectional: bool,
        reverse_direction: bool,
    },
    Serial,
    NoRepetition,
    Periodic {
        chance_of_repetition: f64,
    },
    AdjacentSteps,
    Walk {
        max_step: i64,
    },
    GranularWalk {
        deviation_factor: f64,
    },
    Ratio {
        ratios: Vec<u32>,
    },
    Precision {
        distribution: Vec<f64>,
    },
    Subset {
        min: usize,
        max: usize,
    },
    GroupedRepetition {
        groupings: Vec<usize>,
    },
}

impl ProtocolParams {
    pub fn kind(&self) -> ProtocolKind {
        match self {
            Self::Basic => ProtocolKind::Basic,
            Self::Cycle { .. } => ProtocolKind::Cycle,
            Self::Serial => ProtocolKind::Serial,
            Self::NoRepetition => ProtocolKind::NoRepetition,
            Self::Periodic { .. } => ProtocolKind::Periodic,
            Self::AdjacentSteps => ProtocolKind::AdjacentSteps,
            Self::Walk { .. } => ProtocolKind::Walk,
            Self::GranularWalk { .. } => ProtocolKind::GranularWalk,
            Self::Ratio { .. } => ProtocolKind::Ratio,
            Self::Precision { .. } => ProtocolKind::Precision,
            Self::Subset { .. } => ProtocolKind::Subset,
            Self::GroupedRepetition { .. } => ProtocolKind::GroupedRepetition,
        }
    }
}

/// A protocol's full configuration: its range plus its parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    pub range: Range,
    pub params: ProtocolParams,
}

impl ProtocolConfig {
    pub fn new(range: Range, params: ProtocolParams) -> Self {
        Self { range, params }
    }
}
