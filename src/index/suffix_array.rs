// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array suppliers and the checks every suffix array must pass.
//!
//! The index never builds a suffix array itself. It asks a
//! [`SuffixArraySupplier`] for one, then validates the result before deriving
//! anything from it. Two suppliers ship with the crate:
//!
//! - [`NaiveSuffixArray`]: sorts every suffix with slice comparison.
//!   Correctness-first, O(n² log n) in the worst case (highly repetitive
//!   text). Use it for small inputs or as an oracle.
//! - [`SaisSuffixArray`]: linear-time induced sorting, the default.
//!
//! # Contract
//!
//! For a text of length `n`, a supplier returns `n + 1` positions: a
//! permutation of `0..=n` where position `n` is the sentinel suffix and
//! `text[sa[i]..]` increases strictly with `i`. The sentinel is smaller than
//! every byte, so `sa[0] == n` always.
//!
//! # Validation in O(n)
//!
//! Sortedness is checked without comparing whole suffixes. With the inverse
//! array `isa`, adjacent rows `a = sa[i-1]`, `b = sa[i]` are ordered iff
//! `(text[a], isa[a+1]) < (text[b], isa[b+1])`
//! (Burkhardt & Kärkkäinen, "Fast Lightweight Suffix Array Construction and
//! Checking", CPM 2003).

use super::sais::sais;
use crate::verify::SuffixArrayDefect;

/// Anything that can produce the sentinel-terminated suffix array of a text.
pub trait SuffixArraySupplier {
    /// Short name used in logs and the CLI.
    fn name(&self) -> &'static str;

    /// Suffix array of `text` with the sentinel position included.
    fn suffix_array(&self, text: &[u8]) -> Vec<usize>;
}

/// Sort all suffixes directly. Slow, obviously correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSuffixArray;

impl SuffixArraySupplier for NaiveSuffixArray {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn suffix_array(&self, text: &[u8]) -> Vec<usize> {
        // A proper prefix sorts first, exactly as if the sentinel followed it
        let mut sa: Vec<usize> = (0..=text.len()).collect();
        sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
        sa
    }
}

/// Linear-time SA-IS construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaisSuffixArray;

impl SuffixArraySupplier for SaisSuffixArray {
    fn name(&self) -> &'static str {
        "sa-is"
    }

    fn suffix_array(&self, text: &[u8]) -> Vec<usize> {
        sais(text)
    }
}

/// Check that `suffix_array` is the suffix array of `text`.
///
/// Runs in O(n) time and O(n) extra space. Reports the first defect found:
/// shape problems (length, range, duplicates, sentinel placement) before
/// ordering problems.
pub fn validate_suffix_array(text: &[u8], suffix_array: &[usize]) -> Result<(), SuffixArrayDefect> {
    let inverse = check_permutation(text.len(), suffix_array)?;

    // Row 0 is the sentinel and precedes everything; from row 2 on both
    // neighbours are real positions (< n), so `a + 1` and `b + 1` are valid
    for row in 2..suffix_array.len() {
        let a = suffix_array[row - 1];
        let b = suffix_array[row];
        let ordered = match text[a].cmp(&text[b]) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => inverse[a + 1] < inverse[b + 1],
        };
        if !ordered {
            return Err(SuffixArrayDefect::Unsorted { row });
        }
    }

    Ok(())
}

/// Check length, range, uniqueness and sentinel placement.
///
/// Returns the inverse suffix array on success.
pub(crate) fn check_permutation(
    text_len: usize,
    suffix_array: &[usize],
) -> Result<Vec<usize>, SuffixArrayDefect> {
    let expected = text_len + 1;
    if suffix_array.len() != expected {
        return Err(SuffixArrayDefect::WrongLength {
            expected,
            actual: suffix_array.len(),
        });
    }

    let mut inverse = vec![usize::MAX; expected];
    for (row, &entry) in suffix_array.iter().enumerate() {
        if entry > text_len {
            return Err(SuffixArrayDefect::EntryOutOfRange {
                row,
                entry,
                max: text_len,
            });
        }
        if inverse[entry] != usize::MAX {
            return Err(SuffixArrayDefect::DuplicateEntry { row, entry });
        }
        inverse[entry] = row;
    }

    if suffix_array[0] != text_len {
        return Err(SuffixArrayDefect::SentinelNotFirst {
            found: suffix_array[0],
        });
    }

    Ok(inverse)
}
