//! ApproximateMatcher: picks the closest neighbour and checks it against
//! the caller's tolerance.
//!
//! Relative error is `|value - target| / max(|target|, 1)`. The floor of 1
//! keeps `target == 0` (and other tiny targets) well-defined. Because every
//! candidate for one search shares the same denominator, candidates are
//! ranked on their exact integer distance to the target; floating point is
//! only used for the final comparison with the threshold.

use crate::error::{NotFoundReason, Result};
use crate::types::{Candidate, Match, Threshold};

/// `|value - target| / max(|target|, 1)`.
pub fn relative_error(value: i64, target: i64) -> f64 {
    let distance = distance(value, target);
    let denominator = (target as i128).unsigned_abs().max(1);
    distance as f64 / denominator as f64
}

fn distance(value: i64, target: i64) -> u128 {
    (value as i128 - target as i128).unsigned_abs()
}

/// The candidates left once the search has ruled out an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbours {
    /// Target lies outside the observed range; only the boundary element is
    /// available.
    One(Candidate),
    /// `below.value < target < above.value`.
    Two { below: Candidate, above: Candidate },
}

impl Neighbours {
    /// Closest candidate by distance to `target`; ties go to the smaller
    /// index.
    pub fn closest(&self, target: i64) -> Candidate {
        match *self {
            Neighbours::One(only) => only,
            Neighbours::Two { below, above } => [below, above]
                .into_iter()
                .min_by_key(|c| (distance(c.value, target), c.index))
                .unwrap_or(below),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ApproximateMatcher {
    threshold: Threshold,
}

impl ApproximateMatcher {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub fn resolve(&self, neighbours: Neighbours, target: i64) -> Result<Match> {
        let best = neighbours.closest(target);
        let error = relative_error(best.value, target);
        tracing::debug!(
            index = best.index,
            value = best.value,
            relative_error = error,
            threshold = self.threshold.get(),
            "closest neighbour"
        );

        if error <= self.threshold.get() {
            Ok(Match::approximate(best))
        } else {
            Err(NotFoundReason::OutsideThreshold.into())
        }
    }
}
