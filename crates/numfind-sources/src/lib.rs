//! numfind-sources: sequence source adapters for numfind.
//!
//! Each adapter implements [`numfind_core::SequenceSource`]. [`build_source`]
//! picks one from the `[sequence]` section of the service configuration.

pub mod arithmetic;
pub mod fibonacci;
pub mod file;

pub use arithmetic::Arithmetic;
pub use fibonacci::Fibonacci;
pub use file::FileSequence;

use numfind_core::config::{SequenceConfig, SequenceKind};
use numfind_core::SequenceSource;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while constructing a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid number {token:?} on line {line} of {path}")]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path} is not sorted: value at index {index} is smaller than the one before it")]
    NotMonotonic { path: PathBuf, index: u64 },

    #[error("arithmetic step must be non-negative, got {0}")]
    NegativeStep(i64),
}

/// Build the source described by `config`.
pub fn build_source(config: &SequenceConfig) -> Result<Arc<dyn SequenceSource>, SourceError> {
    let source: Arc<dyn SequenceSource> = match config.kind {
        SequenceKind::File => Arc::new(FileSequence::load(&config.path)?),
        SequenceKind::Fibonacci => Arc::new(Fibonacci::new()),
        SequenceKind::Arithmetic => Arc::new(Arithmetic::new(config.start, config.step)?),
    };
    tracing::info!(source = %source.describe(), "sequence source ready");
    Ok(source)
}
