//! Arithmetic progression `start + step * index`.

use crate::SourceError;
use numfind_core::SequenceSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    start: i64,
    step: i64,
}

impl Arithmetic {
    /// `step` must be non-negative so the progression never decreases.
    pub fn new(start: i64, step: i64) -> Result<Self, SourceError> {
        if step < 0 {
            return Err(SourceError::NegativeStep(step));
        }
        Ok(Self { start, step })
    }
}

impl SequenceSource for Arithmetic {
    /// `None` once the value no longer fits in an `i64`.
    fn value(&self, index: u64) -> Option<i64> {
        let offset = i128::from(self.step).checked_mul(i128::from(index))?;
        i64::try_from(i128::from(self.start) + offset).ok()
    }

    fn describe(&self) -> String {
        format!("arithmetic (start {}, step {})", self.start, self.step)
    }
}
