//! Refiner: binary search inside a bracket.
//!
//! Narrows `[lo, hi]` to either the first index holding the target or two
//! adjacent indices whose values straddle it.

use crate::error::{LocateError, Result};
use crate::sequence::{Probe, SequenceSource};
use crate::types::{Candidate, Phase};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refined {
    /// Smallest index whose value equals the target.
    Exact(Candidate),
    /// `above.index == below.index + 1` and
    /// `below.value < target < above.value`.
    Straddle { below: Candidate, above: Candidate },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Refiner;

impl Refiner {
    /// Requires `lo.value <= target <= hi.value`, and `lo.value < target`
    /// unless `lo` already holds the target.
    pub fn refine<S: SequenceSource + ?Sized>(
        &self,
        probe: &Probe<'_, S>,
        target: i64,
        mut lo: Candidate,
        mut hi: Candidate,
    ) -> Result<Refined> {
        debug_assert!(lo.value <= target && target <= hi.value);
        debug_assert!(lo.index <= hi.index);

        if lo.value == target {
            return Ok(Refined::Exact(lo));
        }

        while hi.index - lo.index > 1 {
            let mid = lo.index + (hi.index - lo.index) / 2;
            let value = read(probe, mid, lo, hi)?;
            let candidate = Candidate::new(mid, value);
            match value.cmp(&target) {
                Ordering::Equal => return self.run_start(probe, target, lo, candidate),
                Ordering::Less => lo = candidate,
                Ordering::Greater => hi = candidate,
            }
        }

        if hi.value == target {
            Ok(Refined::Exact(hi))
        } else {
            Ok(Refined::Straddle {
                below: lo,
                above: hi,
            })
        }
    }

    /// `found` holds the target but may sit in the middle of a run of equal
    /// values. Lower-bound search over `(lo, found]` for the run's first
    /// index; `lo.value < target` throughout.
    fn run_start<S: SequenceSource + ?Sized>(
        &self,
        probe: &Probe<'_, S>,
        target: i64,
        mut lo: Candidate,
        mut found: Candidate,
    ) -> Result<Refined> {
        while found.index - lo.index > 1 {
            let mid = lo.index + (found.index - lo.index) / 2;
            let value = read(probe, mid, lo, found)?;
            if value < target {
                lo = Candidate::new(mid, value);
            } else {
                found = Candidate::new(mid, value);
            }
        }
        Ok(Refined::Exact(found))
    }
}

/// Read `index`, which lies strictly between two defined indices, and check
/// it against the monotonicity contract.
fn read<S: SequenceSource + ?Sized>(
    probe: &Probe<'_, S>,
    index: u64,
    lo: Candidate,
    hi: Candidate,
) -> Result<i64> {
    let Some(value) = probe.value(index) else {
        return Err(LocateError::invalid_sequence(
            Phase::Refining,
            index,
            format!("undefined between defined indices {} and {}", lo.index, hi.index),
        ));
    };
    if value < lo.value || value > hi.value {
        return Err(LocateError::invalid_sequence(
            Phase::Refining,
            index,
            format!(
                "value {value} outside [{}, {}] of its neighbours",
                lo.value, hi.value
            ),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::VecSequence;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn refine(values: &[i64], target: i64, lo: u64, hi: u64) -> Result<Refined> {
        let seq = VecSequence::new(values.to_vec());
        let probe = Probe::new(&seq);
        let lo = Candidate::new(lo, values[lo as usize]);
        let hi = Candidate::new(hi, values[hi as usize]);
        Refiner.refine(&probe, target, lo, hi)
    }

    #[rstest]
    #[case::middle(&[1, 3, 5, 7, 9, 11, 13, 15], 7, 0, 7, 3)]
    #[case::upper_end(&[1, 3, 5, 7, 9, 11, 13, 15], 15, 0, 7, 7)]
    #[case::adjacent_upper(&[1, 3], 3, 0, 1, 1)]
    #[case::lower_end_degenerate(&[4, 4, 4], 4, 0, 0, 0)]
    fn exact_matches(
        #[case] values: &[i64],
        #[case] target: i64,
        #[case] lo: u64,
        #[case] hi: u64,
        #[case] index: u64,
    ) {
        assert_eq!(
            refine(values, target, lo, hi).unwrap(),
            Refined::Exact(Candidate::new(index, target))
        );
    }

    #[test]
    fn straddle_between_neighbours() {
        assert_eq!(
            refine(&[1, 3, 5, 7, 9, 11, 13, 15], 8, 0, 7).unwrap(),
            Refined::Straddle {
                below: Candidate::new(3, 7),
                above: Candidate::new(4, 9),
            }
        );
    }

    #[test]
    fn exact_match_reports_start_of_equal_run() {
        // Midpoint 4 hits the run; the secondary search walks back to 2.
        let values = [0, 1, 5, 5, 5, 5, 5, 5, 9];
        assert_eq!(
            refine(&values, 5, 0, 8).unwrap(),
            Refined::Exact(Candidate::new(2, 5))
        );
    }

    #[test]
    fn run_reaching_upper_bound_reports_first_index() {
        let values = [0, 2, 2, 2, 2];
        assert_eq!(
            refine(&values, 2, 0, 4).unwrap(),
            Refined::Exact(Candidate::new(1, 2))
        );
    }

    #[test]
    fn value_outside_neighbours_is_invalid_sequence() {
        let err = refine(&[0, 1, 99, 3, 4], 3, 0, 4).unwrap_err();
        assert!(matches!(
            err,
            LocateError::InvalidSequence {
                phase: Phase::Refining,
                index: 2,
                ..
            }
        ));
    }

    #[test]
    fn hole_inside_bracket_is_invalid_sequence() {
        struct Holey;
        impl SequenceSource for Holey {
            fn value(&self, index: u64) -> Option<i64> {
                (index != 4).then_some(index as i64)
            }
        }
        let probe = Probe::new(&Holey);
        let err = Refiner
            .refine(&probe, 5, Candidate::new(0, 0), Candidate::new(8, 8))
            .unwrap_err();
        assert!(matches!(err, LocateError::InvalidSequence { index: 4, .. }));
    }
}
