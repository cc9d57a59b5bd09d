//! Test builders: ergonomic constructors for locators and instrumented
//! sources.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use numfind::SharedLocator;
use numfind_core::{Locator, LocatorOptions, SequenceSource, VecSequence};
use numfind_sources::Fibonacci;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Locators
// ---------------------------------------------------------------------------

/// Locator over the given values, in order. Ordering is not checked, so
/// this can also build misbehaving sequences.
pub fn locator_over(values: &[i64]) -> Locator<VecSequence> {
    Locator::new(VecSequence::new(values.to_vec()))
}

/// Locator over Fibonacci numbers `0, 1, 1, 2, 3, 5, 8, 13, 21, ...`.
pub fn fibonacci_locator() -> Locator<Fibonacci> {
    Locator::new(Fibonacci::new())
}

/// Shared, type-erased locator as the HTTP layer holds it.
pub fn shared_locator(source: impl SequenceSource + 'static) -> SharedLocator {
    let source: Arc<dyn SequenceSource> = Arc::new(source);
    Arc::new(Locator::with_options(source, LocatorOptions::default()))
}

// ---------------------------------------------------------------------------
// CountingSource
// ---------------------------------------------------------------------------

/// Wraps a source and counts every `value` call, so tests can check the
/// logarithmic read bound.
pub struct CountingSource<S> {
    inner: S,
    reads: AtomicU64,
}

impl<S: SequenceSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: AtomicU64::new(0),
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }
}

impl<S: SequenceSource> SequenceSource for CountingSource<S> {
    fn value(&self, index: u64) -> Option<i64> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.inner.value(index)
    }
}

/// `value(i) = i * step`, unbounded up to `i64` overflow.
pub struct Multiples(pub i64);

impl SequenceSource for Multiples {
    fn value(&self, index: u64) -> Option<i64> {
        i64::try_from(index).ok()?.checked_mul(self.0)
    }
}

/// Every value is `value(i) = i` except `value(bad) = 0`, which breaks
/// monotonicity.
pub struct DipAt(pub u64);

impl SequenceSource for DipAt {
    fn value(&self, index: u64) -> Option<i64> {
        if index == self.0 {
            Some(0)
        } else {
            i64::try_from(index).ok()
        }
    }
}

/// Panics on every read, standing in for a source with a bug.
pub struct Explodes;

impl SequenceSource for Explodes {
    fn value(&self, index: u64) -> Option<i64> {
        panic!("source exploded reading index {index}");
    }
}

/// `value(i) = i` with a single undefined index at `hole`.
pub struct HoleAt(pub u64);

impl SequenceSource for HoleAt {
    fn value(&self, index: u64) -> Option<i64> {
        if index == self.0 {
            None
        } else {
            i64::try_from(index).ok()
        }
    }
}
