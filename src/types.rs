// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared value types: search intervals and index configuration.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::verify::IndexError;

/// Rows between two rank checkpoints when nothing else is configured.
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 64;

/// A half-open range `[lo, hi)` of suffix array rows.
///
/// Every row in the range is a suffix that starts with the part of the pattern
/// processed so far. `lo == hi` means no suffix matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SearchInterval {
    pub lo: usize,
    pub hi: usize,
}

impl SearchInterval {
    /// The canonical empty interval.
    pub const EMPTY: Self = Self { lo: 0, hi: 0 };

    /// Inverted bounds (`hi < lo`) collapse to the empty interval at `lo`.
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi: hi.max(lo) }
    }

    /// Every row of a BWT with `rows` entries.
    pub fn full(rows: usize) -> Self {
        Self { lo: 0, hi: rows }
    }

    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }

    /// Number of suffixes in the interval.
    pub fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    pub fn rows(&self) -> Range<usize> {
        self.lo..self.hi
    }
}

/// Tunables for index construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Distance between rank checkpoints. Smaller is faster to query and
    /// costs `alphabet_size * n / checkpoint_interval` words of memory.
    pub checkpoint_interval: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }
}

impl IndexConfig {
    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        check_checkpoint_interval(self.checkpoint_interval)
    }
}

/// Rank checkpoints need a spacing of at least one row.
pub(crate) fn check_checkpoint_interval(interval: usize) -> Result<(), IndexError> {
    if interval == 0 {
        return Err(IndexError::InvalidConfig {
            reason: "checkpoint_interval must be at least 1".to_string(),
        });
    }
    Ok(())
}
