// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interval to text offset resolution.

use crate::index::FmIndex;
use crate::types::SearchInterval;
use crate::verify::{contracts, IndexError};

/// Text offsets for every row in `intervals`, sorted ascending and
/// deduplicated.
///
/// The sentinel suffix (offset `text_len()`) is skipped, so the empty pattern
/// resolves to `0..text_len()`. Output does not depend on interval order.
/// Empty intervals (inverted ones included) contribute nothing. An interval
/// ending past `rows()` fails with `OutOfRange` and leaves the index untouched.
pub fn resolve(index: &FmIndex, intervals: &[SearchInterval]) -> Result<Vec<usize>, IndexError> {
    let rows = index.rows();
    if let Some(bad) = intervals.iter().find(|i| !i.is_empty() && i.hi > rows) {
        return Err(IndexError::OutOfRange {
            position: bad.hi,
            len: rows,
        });
    }
    Ok(resolve_rows(index, intervals))
}

/// Resolution for intervals produced by the searchers, which are always
/// inside the suffix array.
pub(crate) fn resolve_rows(index: &FmIndex, intervals: &[SearchInterval]) -> Vec<usize> {
    let sentinel = index.text_len();
    let suffix_array = index.suffix_array();

    let total: usize = intervals.iter().map(SearchInterval::len).sum();
    let mut positions = Vec::with_capacity(total);
    for interval in intervals.iter().filter(|i| !i.is_empty()) {
        contracts::check_interval(interval, index.rows());
        let Some(rows) = suffix_array.get(interval.rows()) else {
            continue;
        };
        positions.extend(
            rows.iter()
                .copied()
                .filter(|&position| position != sentinel),
        );
    }
    positions.sort_unstable();
    positions.dedup();

    contracts::check_positions_sorted(&positions, index.text_len());
    positions
}
