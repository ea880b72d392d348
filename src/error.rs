//! Error types for log checking.

use std::io;
use std::path::PathBuf;

use crate::compare::{Mismatch, Side};

/// Every way a check can fail. None of them are recovered from.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// An input file could not be opened.
    #[error("failed to open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed part-way through a file.
    #[error("failed to read {side} file at line {line}")]
    Read {
        side: Side,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// The first differing byte inside a line pair.
    #[error("mismatch in line {} at column {}", .0.line, .0.column)]
    ContentMismatch(Mismatch),

    /// Both lines agree on their shared prefix but one of them is longer.
    #[error("line length mismatch in line {} at column {}", .0.line, .0.column)]
    LineLengthMismatch(Mismatch),

    /// One file has lines left after the other one ended.
    #[error("mismatch file length at line {line}: {longer} file has more lines")]
    FileLengthMismatch { line: usize, longer: Side },
}

impl CheckError {
    /// The line-level mismatch carried by this error, if any.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            CheckError::ContentMismatch(m) | CheckError::LineLengthMismatch(m) => Some(m),
            _ => None,
        }
    }
}

/// Convenience alias for check results.
pub type CheckResult<T> = Result<T, CheckError>;
