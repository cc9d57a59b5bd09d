//! Domain-specific assertion macros for numfind harnesses.
//!
//! These add context-rich failure messages that make it clear *which* lookup
//! outcome was expected and what came back instead.

/// Assert that a lookup returned an exact match at `index`.
///
/// ```rust
/// assert_found!(locator.locate(13, None), 7, 13);
/// ```
#[macro_export]
macro_rules! assert_found {
    ($outcome:expr, $index:expr, $value:expr) => {{
        let outcome: Result<numfind_core::Match, numfind_core::LocateError> = $outcome;
        match outcome {
            Ok(m) if m.kind == numfind_core::MatchKind::Exact => {
                assert_eq!(
                    (m.index, m.value),
                    ($index, $value),
                    "assert_found! matched the wrong element"
                );
            }
            other => panic!(
                "assert_found! failed:\n  expected: exact ({}, {})\n  actual:   {:?}",
                $index, $value, other
            ),
        }
    }};
}

/// Assert that a lookup returned an approximate match at `index`.
#[macro_export]
macro_rules! assert_approximated {
    ($outcome:expr, $index:expr, $value:expr) => {{
        let outcome: Result<numfind_core::Match, numfind_core::LocateError> = $outcome;
        match outcome {
            Ok(m) if m.kind == numfind_core::MatchKind::Approximate => {
                assert_eq!(
                    (m.index, m.value),
                    ($index, $value),
                    "assert_approximated! matched the wrong element"
                );
            }
            other => panic!(
                "assert_approximated! failed:\n  expected: approximate ({}, {})\n  actual:   {:?}",
                $index, $value, other
            ),
        }
    }};
}

/// Assert that a lookup failed with the given [`NotFoundReason`](numfind_core::NotFoundReason).
#[macro_export]
macro_rules! assert_not_found {
    ($outcome:expr, $reason:expr) => {{
        let outcome: Result<numfind_core::Match, numfind_core::LocateError> = $outcome;
        match outcome {
            Err(numfind_core::LocateError::NotFound(reason)) if reason == $reason => {}
            other => panic!(
                "assert_not_found! failed:\n  expected: NotFound({:?})\n  actual:   {:?}",
                $reason, other
            ),
        }
    }};
}

/// Assert that a lookup was rejected as invalid input.
#[macro_export]
macro_rules! assert_invalid_input {
    ($outcome:expr) => {{
        let outcome: Result<numfind_core::Match, numfind_core::LocateError> = $outcome;
        if !matches!(outcome, Err(numfind_core::LocateError::InvalidInput(_))) {
            panic!(
                "assert_invalid_input! failed:\n  actual: {:?}",
                outcome
            );
        }
    }};
}
