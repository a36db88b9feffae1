// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy and validated wrapper types.
//!
//! Every fallible operation in the crate reports an [`IndexError`]. Construction
//! errors are fatal to the build (no partial index ever escapes), query errors
//! are local to the query, and `OutOfRange` only shows up when a rank query or
//! a hand-built interval points past the end of the BWT.
//!
//! [`MismatchBudget`] follows the same pattern as the other validated types:
//! check once at the boundary, then carry a value that cannot be wrong.

use std::fmt;
use std::io;

/// Why a suffix array was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixArrayDefect {
    /// The array must hold one entry per text position plus the sentinel.
    WrongLength { expected: usize, actual: usize },
    /// An entry points past the sentinel position.
    EntryOutOfRange { row: usize, entry: usize, max: usize },
    /// The same text position appears twice, so the array is not a permutation.
    DuplicateEntry { row: usize, entry: usize },
    /// Row 0 must hold the sentinel suffix, which is smaller than every other.
    SentinelNotFirst { found: usize },
    /// Suffixes at `row - 1` and `row` are out of order.
    Unsorted { row: usize },
}

impl fmt::Display for SuffixArrayDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixArrayDefect::WrongLength { expected, actual } => {
                write!(f, "expected {} entries, got {}", expected, actual)
            }
            SuffixArrayDefect::EntryOutOfRange { row, entry, max } => {
                write!(f, "row {} holds position {} > {}", row, entry, max)
            }
            SuffixArrayDefect::DuplicateEntry { row, entry } => {
                write!(f, "row {} repeats position {}", row, entry)
            }
            SuffixArrayDefect::SentinelNotFirst { found } => {
                write!(f, "row 0 holds position {} instead of the sentinel", found)
            }
            SuffixArrayDefect::Unsorted { row } => {
                write!(f, "suffixes at rows {} and {} are out of order", row - 1, row)
            }
        }
    }
}

/// Errors reported by index construction, queries and persistence.
#[derive(Debug)]
pub enum IndexError {
    /// The supplied suffix array does not belong to the text.
    InvalidSuffixArray(SuffixArrayDefect),
    /// A negative mismatch budget was requested.
    InvalidBudget { requested: i64 },
    /// A rank query or interval reached past the end of the BWT.
    OutOfRange { position: usize, len: usize },
    /// The index configuration cannot be used.
    InvalidConfig { reason: String },
    /// Persisted index bytes failed validation.
    Corrupt { reason: String },
    /// Reading or writing a persisted index failed.
    Io(io::Error),
}

impl IndexError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        IndexError::Corrupt {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidSuffixArray(defect) => {
                write!(f, "invalid suffix array: {}", defect)
            }
            IndexError::InvalidBudget { requested } => {
                write!(f, "mismatch budget must be >= 0, got {}", requested)
            }
            IndexError::OutOfRange { position, len } => {
                write!(f, "position {} exceeds BWT length {}", position, len)
            }
            IndexError::InvalidConfig { reason } => write!(f, "invalid config: {}", reason),
            IndexError::Corrupt { reason } => write!(f, "corrupt index: {}", reason),
            IndexError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for IndexError {
    fn from(err: io::Error) -> Self {
        IndexError::Io(err)
    }
}

impl From<SuffixArrayDefect> for IndexError {
    fn from(defect: SuffixArrayDefect) -> Self {
        IndexError::InvalidSuffixArray(defect)
    }
}

/// A non-negative number of substitutions a query may spend.
///
/// Built from a signed request so callers that take user input (the CLI, FFI
/// layers) get `InvalidBudget` instead of a silent wrap-around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MismatchBudget(usize);

impl MismatchBudget {
    /// Exact search.
    pub const EXACT: Self = Self(0);

    /// Validate a requested budget.
    pub fn new(requested: i64) -> Result<Self, IndexError> {
        if requested < 0 {
            return Err(IndexError::InvalidBudget { requested });
        }
        Ok(Self(usize::try_from(requested).unwrap_or(usize::MAX)))
    }

    /// Number of substitutions still allowed.
    pub fn get(self) -> usize {
        self.0
    }

    /// A pattern of length `m` can never use more than `m` substitutions.
    pub fn clamp_to(self, pattern_len: usize) -> Self {
        Self(self.0.min(pattern_len))
    }

    /// Budget left after one substitution, or `None` once spent.
    pub fn spend(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl TryFrom<i64> for MismatchBudget {
    type Error = IndexError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        Self::new(requested)
    }
}

impl fmt::Display for MismatchBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
