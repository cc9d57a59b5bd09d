//! numfind: number locator service.
//!
//! Finds a number's position in a large monotonically non-decreasing
//! sequence, exactly or within a relative tolerance. This crate wires the
//! core pipeline and the sequence sources to an HTTP API so that integration
//! tests and the binary can import them directly.
//!
//! # Architecture
//!
//! ```text
//! config ──► sources ──► Locator ──► api (axum) ──► HTTP clients
//!                           │
//!                           └──► `numfind locate` (one-shot CLI)
//! ```
//!
//! The [`Locator`](numfind_core::Locator) is immutable and shared behind an
//! `Arc`; each request runs the pipeline on its own with no locking.

pub mod api;
pub mod server;

use numfind_core::config::Config;
use numfind_core::{Locator, SequenceSource};
use std::sync::Arc;

/// The locator as shared between request handlers.
pub type SharedLocator = Arc<Locator<Arc<dyn SequenceSource>>>;

/// Build the source named by `config` and wrap it in a locator.
pub fn build_locator(config: &Config) -> anyhow::Result<SharedLocator> {
    let source = numfind_sources::build_source(&config.sequence)?;
    Ok(Arc::new(Locator::with_options(
        source,
        config.search.locator_options(),
    )))
}
