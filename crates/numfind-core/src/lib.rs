//! numfind-core: locator pipeline for numfind.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types and errors used across all of them.
//!
//! # Architecture
//!
//! ```text
//! validate ──► BoundFinder ──► Refiner ──┬──► Exact
//!                   │                    │
//!                   └────────────────────┴──► ApproximateMatcher
//! ```
//!
//! Every stage reads the sequence through [`SequenceSource`]. Nothing is
//! shared between calls to [`Locator::locate`] except the source itself.

pub mod approximate;
pub mod bounds;
pub mod config;
pub mod error;
pub mod locator;
pub mod refine;
pub mod sequence;
pub mod types;
pub mod validate;

pub use error::{InputError, LocateError, NotFoundReason};
pub use locator::{LocateRequest, Locator, LocatorOptions};
pub use sequence::{SequenceSource, VecSequence};
pub use types::{Candidate, Match, MatchKind, Phase, Threshold};
