//! Constrained pseudo-random sequence generation for algorithmic composition.
//!
//! The crate produces streams of numeric values (pitch indices, durations)
//! under per-protocol statistical or structural constraints: uniform choice,
//! no immediate repetition, bounded random walks, weighted ratios, exhaustive
//! permutation and friends. Each protocol is a small state machine over an
//! inclusive integer [`Range`]; the producer layer maps protocol-selected
//! indices onto caller collections or computed durations.
//!
//! All randomness flows through a [`RandomEngine`] constructed once by the
//! caller and passed `&mut` into every drawing call. Nothing in the crate
//! reaches into a platform RNG, so seeded runs are fully reproducible.

pub mod durations;
pub mod error;
pub mod generator;
pub mod params;
pub mod producer;
pub mod protocols;
pub mod range;
pub mod rng;
mod series;

pub use durations::{DurationProtocol, DurationsProducer, Geometric, Multiples, Prescribed};
pub use error::{ProtocolError, ProtocolResult};
pub use params::{ProtocolConfig, ProtocolKind, ProtocolParams};
pub use producer::CollectionsProducer;
pub use protocols::NumberProtocol;
pub use range::Range;
pub use rng::RandomEngine;
