//! BoundFinder: exponential probing for a bracket around the target.
//!
//! The sequence has no known length, so a plain binary search has no upper
//! end to start from. Probing doubles the index until the value there reaches
//! the target (or the source runs out), which costs `O(log index)` reads.

use crate::error::{InputError, LocateError, Result};
use crate::sequence::{Probe, SequenceSource};
use crate::types::{Candidate, Phase};

/// Where the target sits relative to the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The source has no value at index 0.
    Empty,
    /// `target < value(0)`.
    BelowStart { first: Candidate },
    /// `lo.value <= target <= hi.value`. Unless `lo` is index 0 holding the
    /// target itself, `lo.value < target` strictly.
    Within { lo: Candidate, hi: Candidate },
    /// Finite source whose every value is below the target; `last` is the
    /// final defined index.
    AboveEnd { last: Candidate },
}

#[derive(Debug, Clone, Copy)]
pub struct BoundFinder {
    max_index: u64,
}

impl BoundFinder {
    /// `max_index` is the largest index probing may touch.
    pub fn new(max_index: u64) -> Self {
        Self { max_index }
    }

    pub fn bracket<S: SequenceSource + ?Sized>(
        &self,
        probe: &Probe<'_, S>,
        target: i64,
    ) -> Result<Bracket> {
        let Some(first) = probe.value(0) else {
            return Ok(Bracket::Empty);
        };
        let first = Candidate::new(0, first);

        if target < first.value {
            return Ok(Bracket::BelowStart { first });
        }
        if target == first.value {
            return Ok(Bracket::Within {
                lo: first,
                hi: first,
            });
        }
        if self.max_index == 0 {
            return Err(InputError::RangeExceeded { index: 0 }.into());
        }

        let mut lo = first;
        let mut hi = 1u64;
        loop {
            let Some(value) = probe.value(hi) else {
                return self.find_end(probe, target, lo, hi);
            };
            tracing::trace!(index = hi, value, "probe");
            if value < lo.value {
                return Err(decrease(hi, value, lo));
            }

            let candidate = Candidate::new(hi, value);
            if value >= target {
                return Ok(Bracket::Within { lo, hi: candidate });
            }

            lo = candidate;
            let next = hi.saturating_mul(2).min(self.max_index);
            if next == hi {
                return Err(InputError::RangeExceeded { index: hi }.into());
            }
            hi = next;
        }
    }

    /// The source ended somewhere in `(lo.index, end]`. Binary-search that
    /// gap: either a value `>= target` turns up and gives a bracket, or the
    /// last defined index is the closest the sequence gets.
    fn find_end<S: SequenceSource + ?Sized>(
        &self,
        probe: &Probe<'_, S>,
        target: i64,
        mut lo: Candidate,
        mut end: u64,
    ) -> Result<Bracket> {
        while end - lo.index > 1 {
            let mid = lo.index + (end - lo.index) / 2;
            match probe.value(mid) {
                None => end = mid,
                Some(value) if value < lo.value => return Err(decrease(mid, value, lo)),
                Some(value) if value >= target => {
                    return Ok(Bracket::Within {
                        lo,
                        hi: Candidate::new(mid, value),
                    });
                }
                Some(value) => lo = Candidate::new(mid, value),
            }
        }
        Ok(Bracket::AboveEnd { last: lo })
    }
}

fn decrease(index: u64, value: i64, prev: Candidate) -> LocateError {
    LocateError::invalid_sequence(
        Phase::Bounding,
        index,
        format!(
            "value {value} is below {} at earlier index {}",
            prev.value, prev.index
        ),
    )
}
