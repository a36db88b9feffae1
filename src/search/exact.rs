// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact backward search.

use super::backward_step;
use crate::index::FmIndex;
use crate::types::SearchInterval;

/// Interval of suffix array rows whose suffixes start with `pattern`.
///
/// The empty pattern matches every row. A symbol that never occurs in the
/// text ends the search with [`SearchInterval::EMPTY`] rather than an error.
pub fn exact_match(index: &FmIndex, pattern: &[u8]) -> SearchInterval {
    narrow(index, pattern, index.full_interval())
}

/// Number of occurrences of `pattern`, read off the interval width.
///
/// For the empty pattern this is `text_len() + 1` because the sentinel row
/// is part of the interval; [`super::resolve`] drops it.
pub fn count(index: &FmIndex, pattern: &[u8]) -> usize {
    exact_match(index, pattern).len()
}

/// Backward search for `pattern` starting from an arbitrary interval.
///
/// Shared with approximate search, which finishes with an exact run once its
/// mismatch budget is spent.
#[inline]
pub(crate) fn narrow(index: &FmIndex, pattern: &[u8], mut interval: SearchInterval) -> SearchInterval {
    for &symbol in pattern.iter().rev() {
        if !index.alphabet().contains(symbol) {
            return SearchInterval::EMPTY;
        }
        interval = backward_step(index, symbol, interval);
        if interval.is_empty() {
            return SearchInterval::EMPTY;
        }
    }
    interval
}
