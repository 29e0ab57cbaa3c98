//! Deterministic traversal of the range in sequence.
//!
//! Unidirectional mode wraps from one boundary to the other;
//! bidirectional mode reverses at each boundary without repeating the
//! boundary value on the turn.

use crate::error::{ProtocolError, ProtocolResult};
use crate::params::{ProtocolConfig, ProtocolParams};
use crate::range::Range;
use crate::rng::RandomEngine;

#[derive(Debug, Clone)]
pub struct Cycle {
    range: Range,
    bidirectional: bool,
    reverse_direction: bool,
    initial_selection: Option<i64>,
    position: usize,
    descending: bool,
}

impl Cycle {
    pub fn new(range: Range, bidirectional: bool, reverse_direction: bool) -> Self {
        let mut cycle = Self {
            range,
            bidirectional,
            reverse_direction,
            initial_selection: None,
            position: 0,
            descending: false,
        };
        cycle.rearm();
        cycle
    }

    pub fn with_initial_selection(
        range: Range,
        bidirectional: bool,
        reverse_direction: bool,
        initial_selection: i64,
    ) -> ProtocolResult<Self> {
        if !range.contains(initial_selection) {
            return Err(ProtocolError::InvalidArgument(format!(
                "initial selection {initial_selection} is outside the range [{}, {}]",
                range.start, range.end
            )));
        }
        let mut cycle = Self::new(range, bidirectional, reverse_direction);
        cycle.initial_selection = Some(initial_selection);
        cycle.rearm();
        Ok(cycle)
    }

    pub fn next_int(&mut self, _rng: &mut RandomEngine) -> ProtocolResult<i64> {
        let value = self.range.value_at(self.position);
        self.advance();
        Ok(value)
    }

    pub fn next_decimal(&mut self, rng: &mut RandomEngine) -> ProtocolResult<f64> {
        Ok(self.next_int(rng)? as f64)
    }

    pub fn params(&self) -> ProtocolConfig {
        ProtocolConfig::new(
            self.range,
            ProtocolParams::Cycle {
                bidirectional: self.bidirectional,
                reverse_direction: self.reverse_direction,
            },
        )
    }

    pub(crate) fn set_params(
        &mut self,
        range: Range,
        bidirectional: bool,
        reverse_direction: bool,
    ) -> ProtocolResult<()> {
        self.range = range;
        self.bidirectional = bidirectional;
        self.reverse_direction = reverse_direction;
        if let Some(initial) = self.initial_selection {
            if !range.contains(initial) {
                self.initial_selection = None;
            }
        }
        self.rearm();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.rearm();
    }

    /// Return to the configured starting point and direction.
    fn rearm(&mut self) {
        self.descending = self.reverse_direction;
        self.position = match self.initial_selection {
            Some(value) => self.range.index_of(value),
            None if self.reverse_direction => self.range.size() - 1,
            None => 0,
        };
    }

    fn advance(&mut self) {
        let last = self.range.size() - 1;
        if last == 0 {
            return;
        }
        if self.bidirectional {
            if self.descending {
                if self.position == 0 {
                    self.descending = false;
                    self.position += 1;
                } else {
                    self.position -= 1;
                }
            } else if self.position == last {
                self.descending = true;
                self.position -= 1;
            } else {
                self.position += 1;
            }
        } else if self.descending {
            self.position = if self.position == 0 { last } else { self.position - 1 };
        } else {
            self.position = if self.position == last { 0 } else { self.position + 1 };
        }
    }
}
