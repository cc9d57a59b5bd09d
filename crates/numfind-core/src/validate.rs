//! Parsing of raw request parameters.
//!
//! The HTTP handler and the CLI both receive the target and threshold as
//! strings. These helpers turn them into searchable values or an
//! [`InputError`] without touching any sequence source.

use crate::error::InputError;
use crate::types::Threshold;
use std::num::IntErrorKind;

/// Parse a target such as `"13"`, `"-5"` or `"+8"`.
pub fn parse_target(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::TargetOutOfRange(trimmed.to_string())
        }
        _ => InputError::MalformedTarget(trimmed.to_string()),
    })
}

/// Parse an optional threshold fraction. Blank input means "no threshold".
pub fn parse_threshold(raw: &str) -> Result<Option<Threshold>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let fraction: f64 = trimmed
        .parse()
        .map_err(|_| InputError::MalformedThreshold(trimmed.to_string()))?;
    Threshold::new(fraction).map(Some)
}
