//! Locator: the single public lookup operation.
//!
//! A call runs `Validating → Bounding → Refining → (Exact | Approximating)`
//! once, top to bottom, with no retries.

use crate::approximate::{ApproximateMatcher, Neighbours};
use crate::bounds::{BoundFinder, Bracket};
use crate::error::{InputError, NotFoundReason, Result};
use crate::refine::{Refined, Refiner};
use crate::sequence::{Probe, SequenceSource};
use crate::types::{Match, Phase, Threshold};
use crate::validate;

/// Tunables for [`Locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Largest index exponential probing may read. Targets that would need a
    /// larger index fail with [`InputError::RangeExceeded`].
    pub max_index: u64,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            max_index: u64::MAX,
        }
    }
}

/// A validated lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocateRequest {
    pub target: i64,
    pub threshold: Option<Threshold>,
}

impl LocateRequest {
    pub fn new(target: i64, threshold: Option<f64>) -> std::result::Result<Self, InputError> {
        let threshold = threshold
            .map(Threshold::new)
            .transpose()
            .inspect_err(log_rejected)?;
        Ok(Self { target, threshold })
    }

    /// Build a request from raw boundary strings. `None` or a blank
    /// threshold both mean exact-only.
    pub fn parse(
        target: &str,
        threshold: Option<&str>,
    ) -> std::result::Result<Self, InputError> {
        let target = validate::parse_target(target).inspect_err(log_rejected)?;
        let threshold = match threshold {
            Some(raw) => validate::parse_threshold(raw).inspect_err(log_rejected)?,
            None => None,
        };
        Ok(Self { target, threshold })
    }

    /// Threshold that actually allows approximation; zero counts as absent.
    fn tolerance(&self) -> Option<Threshold> {
        self.threshold.filter(|t| t.permits_approximation())
    }
}

fn log_rejected(error: &InputError) {
    tracing::debug!(phase = %Phase::Validating, %error, "rejected lookup");
}

/// Finds numbers in a monotonically non-decreasing [`SequenceSource`].
///
/// `Locator` holds no per-call state and can be shared across threads behind
/// an `Arc`.
#[derive(Debug, Clone)]
pub struct Locator<S> {
    source: S,
    options: LocatorOptions,
}

impl<S: SequenceSource> Locator<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, LocatorOptions::default())
    }

    pub fn with_options(source: S, options: LocatorOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> LocatorOptions {
        self.options
    }

    /// Locate `target`, accepting an approximate match within `threshold`
    /// (a fraction in `[0, 1]`) when no exact match exists.
    ///
    /// Exact matches report the smallest index holding the target.
    pub fn locate(&self, target: i64, threshold: Option<f64>) -> Result<Match> {
        let request = LocateRequest::new(target, threshold)?;
        self.locate_request(&request)
    }

    pub fn locate_request(&self, request: &LocateRequest) -> Result<Match> {
        let probe = Probe::new(&self.source);
        let outcome = self.run(&probe, request);
        tracing::debug!(
            number = request.target,
            threshold = request.threshold.map(Threshold::get),
            reads = probe.calls(),
            outcome = ?outcome,
            "locate finished"
        );
        outcome
    }

    fn run(&self, probe: &Probe<'_, S>, request: &LocateRequest) -> Result<Match> {
        let target = request.target;

        let bracket = BoundFinder::new(self.options.max_index).bracket(probe, target)?;
        tracing::debug!(phase = %Phase::Bounding, ?bracket, reads = probe.calls());

        let neighbours = match bracket {
            Bracket::Empty => return Err(NotFoundReason::EmptySequence.into()),
            Bracket::BelowStart { first } => Neighbours::One(first),
            Bracket::AboveEnd { last } => Neighbours::One(last),
            Bracket::Within { lo, hi } => {
                let refined = Refiner.refine(probe, target, lo, hi)?;
                tracing::debug!(phase = %Phase::Refining, ?refined, reads = probe.calls());
                match refined {
                    Refined::Exact(found) => return Ok(Match::exact(found)),
                    Refined::Straddle { below, above } => Neighbours::Two { below, above },
                }
            }
        };

        match request.tolerance() {
            Some(threshold) => {
                tracing::debug!(
                    phase = %Phase::Approximating,
                    ?neighbours,
                    threshold = threshold.get()
                );
                ApproximateMatcher::new(threshold).resolve(neighbours, target)
            }
            None => Err(NotFoundReason::NoExactMatch.into()),
        }
    }
}
