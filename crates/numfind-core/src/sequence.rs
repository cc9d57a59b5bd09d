//! Sequence sources: the pluggable `index → value` function the locator
//! searches over.
//!
//! The locator never assumes how values are produced. Anything that can
//! answer [`SequenceSource::value`] for a prefix of the non-negative indices
//! with non-decreasing values can be searched: an in-memory vector, a file,
//! a closed-form generator.

use std::cell::Cell;
use std::sync::Arc;

/// A monotonically non-decreasing integer sequence.
///
/// `value(i)` returns `None` when index `i` lies outside the source's domain:
/// past the end of finite data, or where the next value no longer fits in an
/// `i64`. The defined indices must form a prefix `0..len`. The locator takes
/// the first undefined index it meets while bounding as the end of the
/// sequence; only a gap found between two indices already read as defined
/// is reported as [`LocateError::InvalidSequence`](crate::LocateError::InvalidSequence).
///
/// Implementations must be deterministic for a fixed index and safe to read
/// from many threads at once.
pub trait SequenceSource: Send + Sync {
    fn value(&self, index: u64) -> Option<i64>;

    /// Short human-readable description, surfaced in logs and health checks.
    fn describe(&self) -> String {
        "sequence".to_string()
    }
}

impl<T: SequenceSource + ?Sized> SequenceSource for &T {
    fn value(&self, index: u64) -> Option<i64> {
        (**self).value(index)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: SequenceSource + ?Sized> SequenceSource for Box<T> {
    fn value(&self, index: u64) -> Option<i64> {
        (**self).value(index)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: SequenceSource + ?Sized> SequenceSource for Arc<T> {
    fn value(&self, index: u64) -> Option<i64> {
        (**self).value(index)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl SequenceSource for [i64] {
    fn value(&self, index: u64) -> Option<i64> {
        usize::try_from(index).ok().and_then(|i| self.get(i).copied())
    }

    fn describe(&self) -> String {
        format!("slice ({} values)", self.len())
    }
}

impl SequenceSource for Vec<i64> {
    fn value(&self, index: u64) -> Option<i64> {
        self.as_slice().value(index)
    }

    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}

// ---------------------------------------------------------------------------
// VecSequence
// ---------------------------------------------------------------------------

/// Finite, in-memory sequence.
///
/// Construction does not check ordering; call [`VecSequence::first_decrease`]
/// when the data comes from an untrusted place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecSequence {
    values: Vec<i64>,
}

impl VecSequence {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Index of the first element smaller than its predecessor, if any.
    pub fn first_decrease(&self) -> Option<u64> {
        self.values
            .windows(2)
            .position(|w| w[1] < w[0])
            .map(|i| i as u64 + 1)
    }
}

impl From<Vec<i64>> for VecSequence {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl SequenceSource for VecSequence {
    fn value(&self, index: u64) -> Option<i64> {
        self.values.value(index)
    }

    fn describe(&self) -> String {
        format!("in-memory ({} values)", self.values.len())
    }
}

// ---------------------------------------------------------------------------
// Probe
// ---------------------------------------------------------------------------

/// Per-call view of a source that counts how many values were read.
///
/// A `Probe` lives for a single search and is never shared between threads.
pub struct Probe<'a, S: ?Sized> {
    source: &'a S,
    calls: Cell<u64>,
}

impl<'a, S: SequenceSource + ?Sized> Probe<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            calls: Cell::new(0),
        }
    }

    pub fn value(&self, index: u64) -> Option<i64> {
        self.calls.set(self.calls.get() + 1);
        self.source.value(index)
    }

    /// Number of [`Probe::value`] calls so far.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}
