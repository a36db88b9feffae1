// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index structures.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (each returns early unless
//!    `debug_assertions` is on)
//! 2. **Early failure detection** while tests run
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                 | Property                                       |
//! |--------------------------|------------------------------------------------|
//! | `check_bwt_permutation`  | BWT symbols are a permutation of the text      |
//! | `check_c_table`          | `C[s] + occ(s) == C[s + 1]`                    |
//! | `check_checkpoints`      | checkpoints equal a running recount            |
//! | `check_interval`         | `lo <= hi <= rows`                             |
//! | `check_positions_sorted` | resolved offsets strictly increase, no sentinel|

use crate::index::{Bwt, CTable, RankIndex};
use crate::types::SearchInterval;

/// BWT (sentinel row excluded) holds exactly the text's symbols.
#[inline]
pub fn check_bwt_permutation(text: &[u8], bwt: &Bwt) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        bwt.len(),
        text.len() + 1,
        "Contract violation: BWT has {} rows for a text of length {}",
        bwt.len(),
        text.len()
    );

    let mut counts = [0isize; 256];
    for &byte in text {
        counts[byte as usize] += 1;
    }
    for symbol in bwt.symbols().flatten() {
        counts[symbol as usize] -= 1;
    }
    debug_assert!(
        counts.iter().all(|&c| c == 0),
        "Contract violation: BWT is not a permutation of the text"
    );
}

/// Each C bucket is exactly as wide as the symbol's BWT occurrence count.
#[inline]
pub fn check_c_table(c_table: &CTable, bwt: &Bwt) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut counts = [0usize; 256];
    for symbol in bwt.symbols().flatten() {
        counts[symbol as usize] += 1;
    }
    for symbol in 0..=255u8 {
        debug_assert_eq!(
            c_table.occurrences(symbol),
            counts[symbol as usize],
            "Contract violation: C bucket for {:#04x} has width {} but BWT holds {}",
            symbol,
            c_table.occurrences(symbol),
            counts[symbol as usize]
        );
    }
    debug_assert_eq!(
        c_table.rows(),
        bwt.len(),
        "Contract violation: C table covers {} rows, BWT has {}",
        c_table.rows(),
        bwt.len()
    );
}

/// Every stored checkpoint equals a full recount at its row.
///
/// One pass with running counts, so the check stays linear.
#[inline]
pub fn check_checkpoints(rank: &RankIndex) {
    if !cfg!(debug_assertions) {
        return;
    }
    let interval = rank.checkpoint_interval();
    let symbols = rank.alphabet().symbols();
    let mut running = [0usize; 256];

    for row in 0..=rank.len() {
        if row % interval == 0 {
            let checkpoint = row / interval;
            for &symbol in symbols {
                debug_assert_eq!(
                    rank.checkpoint(checkpoint, symbol),
                    Some(running[symbol as usize]),
                    "Contract violation: checkpoint {} for {:#04x} disagrees with recount",
                    checkpoint,
                    symbol
                );
            }
        }
        if let Some(symbol) = rank.bwt().symbol_at(row) {
            running[symbol as usize] += 1;
        }
    }
}

/// Interval is well-formed and inside the suffix array.
#[inline]
pub fn check_interval(interval: &SearchInterval, rows: usize) {
    debug_assert!(
        interval.lo <= interval.hi && interval.hi <= rows,
        "Contract violation: interval [{}, {}) outside 0..{}",
        interval.lo,
        interval.hi,
        rows
    );
}

/// Resolved offsets are strictly increasing and never the sentinel.
#[inline]
pub fn check_positions_sorted(positions: &[usize], text_len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "Contract violation: resolved positions are not strictly increasing"
    );
    debug_assert!(
        positions.last().map_or(true, |&last| last < text_len),
        "Contract violation: resolved positions include the sentinel"
    );
}
