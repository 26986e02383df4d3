//! Pipeline error taxonomy.
//!
//! Only two failure kinds exist: file access and input encoding. Regex
//! non-matches and unclassifiable descriptions are normal control flow,
//! never errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error surfaced by a pipeline run. Not retried; aborts the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input file missing/unreadable, or output path unwritable.
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input bytes are not valid UTF-8.
    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    Encoding { path: PathBuf, offset: usize },
}

impl PipelineError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PipelineError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
