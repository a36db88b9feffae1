// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! Everything here is backward search. Start from the interval of all rows,
//! read the pattern right to left, and narrow the interval one symbol at a
//! time using only the C table and rank queries:
//!
//! ```text
//! lo' = C[s] + rank(s, lo)
//! hi' = C[s] + rank(s, hi)
//! ```
//!
//! Exact search follows one path. Approximate search branches on every
//! alphabet symbol while it still has mismatches to spend. Either way the
//! result is one or more intervals, which [`resolve`] turns into text offsets.

mod approximate;
mod exact;
mod resolve;

pub use approximate::approximate_match;
#[cfg(feature = "parallel")]
pub use approximate::approximate_match_parallel;
pub use exact::{count, exact_match};
pub use resolve::resolve;
use resolve::resolve_rows;

use tracing::trace;

use crate::index::FmIndex;
use crate::types::SearchInterval;
use crate::verify::{contracts, IndexError, MismatchBudget};

/// Narrow `interval` to the suffixes that are preceded by `symbol`.
#[inline]
pub(crate) fn backward_step(index: &FmIndex, symbol: u8, interval: SearchInterval) -> SearchInterval {
    let base = index.c_table().get(symbol);
    let rank = index.rank_index();
    let next = SearchInterval::new(
        base + rank.occ(symbol, interval.lo),
        base + rank.occ(symbol, interval.hi),
    );
    contracts::check_interval(&next, index.rows());
    next
}

/// Sorted text offsets where `pattern` occurs with at most `max_mismatches`
/// substitutions. A budget of 0 is exact search.
pub fn search(index: &FmIndex, pattern: &[u8], max_mismatches: i64) -> Result<Vec<usize>, IndexError> {
    let budget = MismatchBudget::new(max_mismatches)?;
    let positions = if budget == MismatchBudget::EXACT {
        resolve_rows(index, &[exact_match(index, pattern)])
    } else {
        #[cfg(feature = "parallel")]
        let intervals = approximate_match_parallel(index, pattern, max_mismatches)?;
        #[cfg(not(feature = "parallel"))]
        let intervals = approximate_match(index, pattern, max_mismatches)?;
        resolve_rows(index, &intervals)
    };
    trace!(
        pattern_len = pattern.len(),
        budget = budget.get(),
        hits = positions.len(),
        "search finished"
    );
    Ok(positions)
}

/// Build a throwaway index over `reference` and return exact hits of `query`.
pub fn exact_match_positions(query: &[u8], reference: &[u8]) -> Result<Vec<usize>, IndexError> {
    inexact_match_positions(query, reference, 0)
}

/// Build a throwaway index over `reference` and return hits of `query` with at
/// most `mismatches` substitutions.
///
/// Convenient for one-off lookups. Anything that queries the same reference
/// twice should build an [`FmIndex`] once and call [`search`].
pub fn inexact_match_positions(
    query: &[u8],
    reference: &[u8],
    mismatches: i64,
) -> Result<Vec<usize>, IndexError> {
    // Reject a bad budget before paying for the build
    MismatchBudget::new(mismatches)?;
    let index = FmIndex::build(reference)?;
    search(&index, query, mismatches)
}

impl FmIndex {
    /// See [`search`].
    pub fn search(&self, pattern: &[u8], max_mismatches: i64) -> Result<Vec<usize>, IndexError> {
        search(self, pattern, max_mismatches)
    }

    /// See [`exact_match`].
    pub fn exact_match(&self, pattern: &[u8]) -> SearchInterval {
        exact_match(self, pattern)
    }

    /// See [`approximate_match`].
    pub fn approximate_match(
        &self,
        pattern: &[u8],
        max_mismatches: i64,
    ) -> Result<Vec<SearchInterval>, IndexError> {
        approximate_match(self, pattern, max_mismatches)
    }

    /// See [`count`].
    pub fn count(&self, pattern: &[u8]) -> usize {
        count(self, pattern)
    }

    /// Sorted offsets of exact occurrences.
    pub fn exact_positions(&self, pattern: &[u8]) -> Vec<usize> {
        resolve_rows(self, &[exact_match(self, pattern)])
    }

    /// See [`resolve`].
    pub fn resolve(&self, intervals: &[SearchInterval]) -> Result<Vec<usize>, IndexError> {
        resolve(self, intervals)
    }
}
