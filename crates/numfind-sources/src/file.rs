//! File-backed sequence.
//!
//! The file holds integers separated by any whitespace, in non-decreasing
//! order. Values are loaded once at startup and served from memory.

use crate::SourceError;
use numfind_core::{SequenceSource, VecSequence};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSequence {
    path: PathBuf,
    values: VecSequence,
}

impl FileSequence {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let contents = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        let values = parse(&path, &contents)?;
        tracing::debug!(path = %path.display(), count = values.len(), "loaded sequence file");
        Ok(Self { path, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse(path: &Path, contents: &str) -> Result<VecSequence, SourceError> {
    let mut values = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| SourceError::Parse {
                path: path.to_path_buf(),
                line: line_no + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    let values = VecSequence::new(values);
    if let Some(index) = values.first_decrease() {
        return Err(SourceError::NotMonotonic {
            path: path.to_path_buf(),
            index,
        });
    }
    Ok(values)
}

impl SequenceSource for FileSequence {
    fn value(&self, index: u64) -> Option<i64> {
        self.values.value(index)
    }

    fn describe(&self) -> String {
        format!("file {} ({} values)", self.path().display(), self.values.len())
    }
}
