//! Lockstep line comparison of an expected log against an actual one.
//!
//! Both inputs are read one line at a time, the expected side first. The
//! first differing byte (or the first length difference) ends the run.

use std::fmt;
use std::io::BufRead;

use log::{debug, trace};
use sha2::{Digest, Sha256};

use crate::error::{CheckError, CheckResult};
use crate::utils::read_line;

/// Which of the two inputs something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Expected,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// A byte differs inside the shared prefix.
    Content,
    /// The shared prefix is equal but the lengths differ.
    LineLength,
}

/// The first point where two logs diverge inside a line pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset into both lines.
    pub column: usize,
    pub kind: MismatchKind,
    pub expected: Vec<u8>,
    pub actual: Vec<u8>,
}

/// What a successful run saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of line pairs compared.
    pub lines: usize,
    /// SHA-256 over every matched line, each followed by `\n`.
    ///
    /// Without `strict_eol` this is the same for LF and CRLF logs; with it,
    /// a trailing `\r` is part of the hashed line.
    pub digest: String,
}

/// Column and kind of the first divergence between two lines, if any.
pub fn first_difference(expected: &[u8], actual: &[u8]) -> Option<(usize, MismatchKind)> {
    if let Some(column) = expected.iter().zip(actual).position(|(e, a)| e != a) {
        return Some((column, MismatchKind::Content));
    }
    if expected.len() != actual.len() {
        return Some((expected.len().min(actual.len()), MismatchKind::LineLength));
    }
    None
}

/// Where one lockstep read left the two inputs.
enum Step {
    Both,
    ExpectedOnly,
    ActualOnly,
    Neither,
}

/// Compares an expected and an actual line source in lockstep.
pub struct LineComparator<E, A> {
    expected: E,
    actual: A,
    strict_eol: bool,
    expected_line: Vec<u8>,
    actual_line: Vec<u8>,
}

impl<E: BufRead, A: BufRead> LineComparator<E, A> {
    pub fn new(expected: E, actual: A) -> Self {
        LineComparator {
            expected,
            actual,
            strict_eol: false,
            expected_line: Vec::new(),
            actual_line: Vec::new(),
        }
    }

    /// Treat a `\r` before the newline as line content.
    pub fn strict_eol(mut self, strict_eol: bool) -> Self {
        self.strict_eol = strict_eol;
        self
    }

    fn read(&mut self, side: Side, line: usize) -> CheckResult<bool> {
        let strict_eol = self.strict_eol;
        let result = match side {
            Side::Expected => read_line(&mut self.expected, &mut self.expected_line, strict_eol),
            Side::Actual => read_line(&mut self.actual, &mut self.actual_line, strict_eol),
        };
        result.map_err(|source| CheckError::Read { side, line, source })
    }

    // The actual side is only read once the expected side has produced its
    // line, and vice versa: neither input gets ahead of the other.
    fn step(&mut self, line: usize) -> CheckResult<Step> {
        let has_expected = self.read(Side::Expected, line)?;
        let has_actual = self.read(Side::Actual, line)?;
        Ok(match (has_expected, has_actual) {
            (true, true) => Step::Both,
            (true, false) => Step::ExpectedOnly,
            (false, true) => Step::ActualOnly,
            (false, false) => Step::Neither,
        })
    }

    /// Consumes both inputs up to the first divergence.
    pub fn run(mut self) -> CheckResult<Summary> {
        debug!("comparing logs (strict_eol={})", self.strict_eol);

        let mut hasher = Sha256::new();
        let mut line = 1;

        loop {
            match self.step(line)? {
                Step::Both => {}
                Step::ExpectedOnly => {
                    return Err(CheckError::FileLengthMismatch {
                        line,
                        longer: Side::Expected,
                    })
                }
                Step::ActualOnly => {
                    return Err(CheckError::FileLengthMismatch {
                        line,
                        longer: Side::Actual,
                    })
                }
                Step::Neither => break,
            }

            trace!(
                "line {line}: {} / {} bytes",
                self.expected_line.len(),
                self.actual_line.len()
            );

            if let Some((column, kind)) = first_difference(&self.expected_line, &self.actual_line) {
                debug!("line {line} diverges at column {column} ({kind:?})");
                let mismatch = Mismatch {
                    line,
                    column,
                    kind,
                    expected: std::mem::take(&mut self.expected_line),
                    actual: std::mem::take(&mut self.actual_line),
                };
                return Err(match kind {
                    MismatchKind::Content => CheckError::ContentMismatch(mismatch),
                    MismatchKind::LineLength => CheckError::LineLengthMismatch(mismatch),
                });
            }

            hasher.update(&self.expected_line);
            hasher.update(b"\n");
            line += 1;
        }

        Ok(Summary {
            lines: line - 1,
            digest: hex::encode(hasher.finalize()),
        })
    }
}

/// Compares two line sources with default settings.
pub fn compare<E: BufRead, A: BufRead>(expected: E, actual: A) -> CheckResult<Summary> {
    LineComparator::new(expected, actual).run()
}
