//! Without-replacement exhaustion over a discrete generator's slots.
//!
//! A pass over n slots starts with weight 1 everywhere; each draw zeroes
//! the selected slot, so within one pass every slot is drawn exactly
//! once, in an order uniform subject to without-replacement sampling.
//! Callers reset when a pass completes.

use crate::error::ProtocolResult;
use crate::generator::DiscreteGenerator;
use crate::rng::RandomEngine;

/// Draw one unexhausted slot and exclude it from the rest of the pass.
pub(crate) fn draw(
    generator: &mut DiscreteGenerator,
    rng: &mut RandomEngine,
) -> ProtocolResult<usize> {
    let index = generator.draw(rng)?;
    generator.update_weight(index, 0.0)?;
    Ok(index)
}

/// True when every slot has been drawn this pass.
pub(crate) fn is_complete(generator: &DiscreteGenerator) -> bool {
    generator.weights().iter().all(|w| *w == 0.0)
}

/// Re-enable every slot, starting a fresh exhaustive pass.
pub(crate) fn reset(generator: &mut DiscreteGenerator) {
    generator.set_all(1.0);
}
