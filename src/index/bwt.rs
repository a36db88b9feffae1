// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burrows-Wheeler transform and the C table.
//!
//! ```text
//! text = "banana", SA = [6, 5, 3, 1, 0, 4, 2]
//!
//! row  SA  suffix     BWT = text[SA - 1]
//!  0    6  $           a
//!  1    5  a$          n
//!  2    3  ana$        n
//!  3    1  anana$      b
//!  4    0  banana$     $   <- sentinel row
//!  5    4  na$         a
//!  6    2  nana$       a
//! ```
//!
//! The sentinel is not a byte. The BWT stores one byte per row and remembers
//! which row holds the sentinel; the byte stored there is a placeholder that
//! rank queries never count. That keeps `0x00` available as a text symbol.
//!
//! # INVARIANTS
//!
//! 1. **PERMUTATION**: the BWT symbols (sentinel row excluded) are a multiset
//!    permutation of the text.
//! 2. **C_TABLE**: `C[s] = 1 + #{text bytes < s}` and
//!    `C[s] + occ(s) == C[s + 1]` for every byte `s`.

use super::suffix_array::validate_suffix_array;
use crate::verify::{contracts, IndexError};

/// Byte stored in the sentinel row. Never counted by rank queries.
pub(crate) const SENTINEL_PLACEHOLDER: u8 = 0;

/// Character used when rendering the sentinel.
pub const SENTINEL_DISPLAY: char = '$';

/// The last column of the sorted rotation matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bwt {
    bytes: Vec<u8>,
    sentinel_row: usize,
}

impl Bwt {
    pub(crate) fn from_parts(mut bytes: Vec<u8>, sentinel_row: usize) -> Self {
        debug_assert!(sentinel_row < bytes.len());
        bytes[sentinel_row] = SENTINEL_PLACEHOLDER;
        Self {
            bytes,
            sentinel_row,
        }
    }

    /// Number of rows (text length plus the sentinel).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A BWT always holds at least the sentinel row.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Row whose symbol is the sentinel (the row of suffix 0).
    pub fn sentinel_row(&self) -> usize {
        self.sentinel_row
    }

    /// Symbol in `row`, or `None` for the sentinel row and rows past the end.
    #[inline]
    pub fn symbol_at(&self, row: usize) -> Option<u8> {
        if row == self.sentinel_row {
            return None;
        }
        self.bytes.get(row).copied()
    }

    /// Raw row bytes, with a placeholder in the sentinel row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Symbols row by row, `None` marking the sentinel.
    pub fn symbols(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        (0..self.bytes.len()).map(move |row| self.symbol_at(row))
    }

    /// Lossy rendering with `$` for the sentinel.
    pub fn to_display_string(&self) -> String {
        self.symbols()
            .map(|symbol| symbol.map_or(SENTINEL_DISPLAY, char::from))
            .collect()
    }
}

/// Number of text symbols smaller than each byte, sentinel included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CTable {
    /// `less[s]` for `s` in `0..=255`, plus `less[256]` = total rows.
    less: Vec<usize>,
}

impl CTable {
    /// One frequency pass over the text, then an exclusive prefix sum.
    pub fn from_text(text: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        for &byte in text {
            counts[byte as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    pub(crate) fn from_counts(counts: &[usize; 256]) -> Self {
        let mut less = vec![0usize; 257];
        // The sentinel is smaller than every byte
        less[0] = 1;
        for byte in 0..256 {
            less[byte + 1] = less[byte] + counts[byte];
        }
        Self { less }
    }

    /// First suffix array row whose suffix starts with `symbol`.
    #[inline]
    pub fn get(&self, symbol: u8) -> usize {
        self.less[symbol as usize]
    }

    /// How often `symbol` occurs in the text.
    pub fn occurrences(&self, symbol: u8) -> usize {
        self.less[symbol as usize + 1] - self.less[symbol as usize]
    }

    /// Total rows: text length plus the sentinel.
    pub fn rows(&self) -> usize {
        self.less[256]
    }
}

/// Derive the BWT and C table from a text and its suffix array.
///
/// The suffix array is fully validated first (length, permutation, sentinel
/// placement, order); any defect fails the build with `InvalidSuffixArray`.
pub fn build_bwt(text: &[u8], suffix_array: &[usize]) -> Result<(Bwt, CTable), IndexError> {
    validate_suffix_array(text, suffix_array)?;

    let mut bytes = Vec::with_capacity(suffix_array.len());
    let mut sentinel_row = 0;
    for (row, &position) in suffix_array.iter().enumerate() {
        if position == 0 {
            sentinel_row = row;
            bytes.push(SENTINEL_PLACEHOLDER);
        } else {
            bytes.push(text[position - 1]);
        }
    }

    let bwt = Bwt::from_parts(bytes, sentinel_row);
    let c_table = CTable::from_text(text);

    contracts::check_bwt_permutation(text, &bwt);
    contracts::check_c_table(&c_table, &bwt);

    Ok((bwt, c_table))
}

/// Build the BWT by sorting every rotation of `text + sentinel`.
///
/// Quadratic in time and memory traffic. Kept as a reference for testing the
/// suffix-array route.
pub fn naive_bwt(text: &[u8]) -> Bwt {
    let rows = text.len() + 1;
    // Sentinel is 0, bytes shift up by one
    let symbol = |k: usize| -> u16 {
        if k == text.len() {
            0
        } else {
            u16::from(text[k]) + 1
        }
    };
    let rotation = |start: usize| (0..rows).map(move |k| symbol((start + k) % rows));

    let mut starts: Vec<usize> = (0..rows).collect();
    starts.sort_by(|&a, &b| rotation(a).cmp(rotation(b)));

    let mut bytes = Vec::with_capacity(rows);
    let mut sentinel_row = 0;
    for (row, &start) in starts.iter().enumerate() {
        if start == 0 {
            sentinel_row = row;
            bytes.push(SENTINEL_PLACEHOLDER);
        } else {
            bytes.push(text[start - 1]);
        }
    }
    Bwt::from_parts(bytes, sentinel_row)
}
