//! Core types for numfind-core.
//!
//! This module defines the values that flow between pipeline stages: the
//! [`Candidate`] pairs materialised by the search, the final [`Match`], the
//! validated [`Threshold`], and the [`Phase`] discriminant used for logging
//! and error context.

use crate::error::InputError;

/// A position in the sequence together with the value observed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub index: u64,
    pub value: i64,
}

impl Candidate {
    pub fn new(index: u64, value: i64) -> Self {
        Self { index, value }
    }
}

/// Whether a [`Match`] equals the target or was accepted under a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    Approximate,
}

/// A successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Index of the matched element.
    pub index: u64,
    /// Value stored at `index`. Differs from the target only for
    /// [`MatchKind::Approximate`].
    pub value: i64,
    pub kind: MatchKind,
}

impl Match {
    pub fn exact(candidate: Candidate) -> Self {
        Self {
            index: candidate.index,
            value: candidate.value,
            kind: MatchKind::Exact,
        }
    }

    pub fn approximate(candidate: Candidate) -> Self {
        Self {
            index: candidate.index,
            value: candidate.value,
            kind: MatchKind::Approximate,
        }
    }

    pub fn is_approximate(&self) -> bool {
        self.kind == MatchKind::Approximate
    }
}

/// Maximum relative deviation accepted for an approximate match.
///
/// Always finite and within `[0, 1]`. Construct with [`Threshold::new`]; a
/// zero threshold is valid but [`Threshold::permits_approximation`] reports
/// `false` for it, so it behaves exactly like an absent threshold.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Result<Self, InputError> {
        if !fraction.is_finite() {
            return Err(InputError::ThresholdNotFinite);
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(InputError::ThresholdOutOfRange(fraction));
        }
        // Folds -0.0 into 0.0.
        Ok(Self(fraction + 0.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn permits_approximation(self) -> bool {
        self.0 > 0.0
    }
}

/// Pipeline stage, used in tracing events and in
/// [`LocateError::InvalidSequence`](crate::LocateError::InvalidSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Validating,
    Bounding,
    Refining,
    Approximating,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Validating => write!(f, "validating"),
            Phase::Bounding => write!(f, "bounding"),
            Phase::Refining => write!(f, "refining"),
            Phase::Approximating => write!(f, "approximating"),
        }
    }
}
