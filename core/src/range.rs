//! The inclusive integer interval every protocol produces values within.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, ProtocolResult};

/// Inclusive interval `[start, end]`. Protocol-internal indices lie in
/// `[0, size - 1]` and map to values via `value = index + offset`.
///
/// Immutable once constructed; reconfiguration replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> ProtocolResult<Self> {
        if end < start {
            return Err(ProtocolError::InvalidArgument(format!(
                "range end {end} must not be less than range start {start}"
            )));
        }
        // size() must stay representable as an i64 count.
        if end.checked_sub(start).and_then(|span| span.checked_add(1)).is_none() {
            return Err(ProtocolError::InvalidArgument(format!(
                "range [{start}, {end}] spans more values than can be addressed"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn offset(&self) -> i64 {
        self.start
    }

    /// Number of selectable values: `end - start + 1`, always >= 1.
    pub fn size(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Distance between the bounds, used by continuous step derivation.
    pub fn span(&self) -> i64 {
        self.end - self.start
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.start && value <= self.end
    }

    pub fn contains_f64(&self, value: f64) -> bool {
        value >= self.start as f64 && value <= self.end as f64
    }

    /// Vector index of an in-range value.
    pub fn index_of(&self, value: i64) -> usize {
        (value - self.start) as usize
    }

    /// Value at a vector index.
    pub fn value_at(&self, index: usize) -> i64 {
        self.start + index as i64
    }
}
