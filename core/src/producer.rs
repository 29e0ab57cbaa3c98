//! Mapping from protocol-selected indices onto a source collection.
//!
//! The owned protocol's range is always `[0, source.len() - 1]`. When a
//! source swap changes the collection size, the protocol is reset to
//! its default parameters over the new range; custom parameters are
//! intentionally discarded. A same-size swap preserves them.

use crate::error::{ProtocolError, ProtocolResult};
use crate::params::ProtocolConfig;
use crate::protocols::NumberProtocol;
use crate::range::Range;
use crate::rng::RandomEngine;

pub struct CollectionsProducer<T> {
    source: Vec<T>,
    protocol: NumberProtocol,
}

impl<T: Clone> CollectionsProducer<T> {
    pub fn new(source: Vec<T>, mut protocol: NumberProtocol) -> ProtocolResult<Self> {
        check_source_size(source.len())?;
        protocol.set_range_with_defaults(source_range(source.len()));
        Ok(Self { source, protocol })
    }

    /// Draw one index from the protocol and map it onto the source.
    pub fn get_item(&mut self, rng: &mut RandomEngine) -> ProtocolResult<T> {
        let selected = self.protocol.next_int(rng)?;
        let offset = self.protocol.params().range.offset();
        let slot = (selected - offset) as usize;
        self.source.get(slot).cloned().ok_or_else(|| {
            ProtocolError::InvalidState(format!(
                "protocol selected {selected}, outside the source collection"
            ))
        })
    }

    /// Produce `count` consecutive mapped items, identical in order to
    /// `count` sequential `get_item` calls.
    pub fn get_collection(
        &mut self,
        count: usize,
        rng: &mut RandomEngine,
    ) -> ProtocolResult<Vec<T>> {
        (0..count).map(|_| self.get_item(rng)).collect()
    }

    pub fn get_params(&self) -> ProtocolConfig {
        self.protocol.params()
    }

    pub fn set_params(&mut self, config: ProtocolConfig) -> ProtocolResult<()> {
        self.protocol.set_params(config)
    }

    /// Replace the active protocol. Its range is forced to the source
    /// size and its parameters reset to the variant's defaults.
    pub fn set_protocol(&mut self, mut protocol: NumberProtocol) {
        protocol.set_range_with_defaults(source_range(self.source.len()));
        log::debug!("producer: protocol changed to {}", protocol.kind());
        self.protocol = protocol;
    }

    /// Replace the source collection. A smaller-than-two collection is
    /// rejected and the previous source kept. A size change reconfigures
    /// the protocol to defaults over the new range.
    pub fn set_source(&mut self, source: Vec<T>) -> ProtocolResult<()> {
        check_source_size(source.len())?;
        if source.len() != self.source.len() {
            log::debug!(
                "producer: source size changed from {} to {}, protocol reset to defaults",
                self.source.len(),
                source.len()
            );
            self.protocol.set_range_with_defaults(source_range(source.len()));
        }
        self.source = source;
        Ok(())
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn reset(&mut self) {
        self.protocol.reset();
    }
}

fn source_range(len: usize) -> Range {
    Range {
        start: 0,
        end: len as i64 - 1,
    }
}

fn check_source_size(len: usize) -> ProtocolResult<()> {
    if len < 2 {
        return Err(ProtocolError::InvalidArgument(
            "the source collection provided is too small; it must hold two or more elements"
                .into(),
        ));
    }
    Ok(())
}
