//! Error types for numfind-core.

use crate::types::Phase;
use thiserror::Error;

/// Result type for locator operations.
pub type Result<T> = std::result::Result<T, LocateError>;

/// Every way a call to [`Locator::locate`](crate::Locator::locate) can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    /// The caller supplied a target or threshold that cannot be searched for.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// The search completed without an acceptable match.
    #[error(transparent)]
    NotFound(#[from] NotFoundReason),

    /// The source broke its monotonicity contract mid-search.
    #[error("sequence violated its contract at index {index} while {phase}: {detail}")]
    InvalidSequence {
        phase: Phase,
        index: u64,
        detail: String,
    },
}

impl LocateError {
    pub(crate) fn invalid_sequence(phase: Phase, index: u64, detail: impl Into<String>) -> Self {
        LocateError::InvalidSequence {
            phase,
            index,
            detail: detail.into(),
        }
    }

    /// `true` for errors caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, LocateError::InvalidInput(_) | LocateError::NotFound(_))
    }
}

/// Rejected input, reported before the source is consulted (except
/// [`InputError::RangeExceeded`], which is only discovered while probing).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid number parameter: {0:?} is not an integer")]
    MalformedTarget(String),

    #[error("Invalid number parameter: {0} does not fit in a 64-bit signed integer")]
    TargetOutOfRange(String),

    #[error("Invalid thresholdPercentage parameter: {0:?} is not a number")]
    MalformedThreshold(String),

    #[error("Invalid thresholdPercentage parameter: must be finite")]
    ThresholdNotFinite,

    #[error("Invalid thresholdPercentage parameter: {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),

    #[error("target exceeds the searchable index range (probe stopped at index {index})")]
    RangeExceeded { index: u64 },
}

/// Why no match was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFoundReason {
    #[error("number not found")]
    NoExactMatch,

    #[error("number not found within acceptable threshold")]
    OutsideThreshold,

    #[error("number not found: sequence is empty")]
    EmptySequence,
}
