//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the brute-force oracles every index query is checked against.

#![doc(hidden)]

use crate::index::Bwt;

/// Every offset where `pattern` occurs in `text`, by scanning each window.
///
/// The empty pattern occurs at every offset `0..text.len()`.
pub fn naive_occurrences(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    hamming_occurrences(text, pattern, 0)
}

/// Every offset where `pattern` matches `text` with at most `k` differing
/// positions.
pub fn hamming_occurrences(text: &[u8], pattern: &[u8], k: usize) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..text.len()).collect();
    }
    if pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| hamming_distance(window, pattern) <= k)
        .map(|(offset, _)| offset)
        .collect()
}

/// Number of positions where two equal-length slices differ.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Every string over `alphabet` within `k` substitutions of `pattern`.
///
/// Exponential in `k`; only for cross-checking small cases. Output is sorted
/// and deduplicated.
pub fn hamming_variants(pattern: &[u8], k: usize, alphabet: &[u8]) -> Vec<Vec<u8>> {
    let mut variants = vec![pattern.to_vec()];
    let mut frontier = vec![pattern.to_vec()];
    for _ in 0..k {
        let mut next = Vec::new();
        for variant in &frontier {
            for position in 0..variant.len() {
                for &symbol in alphabet {
                    if symbol != variant[position] {
                        let mut mutated = variant.clone();
                        mutated[position] = symbol;
                        next.push(mutated);
                    }
                }
            }
        }
        next.sort();
        next.dedup();
        variants.extend(next.iter().cloned());
        frontier = next;
    }
    variants.sort();
    variants.dedup();
    variants
}

/// Count of `symbol` in `BWT[0..position)` by walking every row.
pub fn brute_rank(bwt: &Bwt, symbol: u8, position: usize) -> usize {
    bwt.symbols()
        .take(position)
        .filter(|&s| s == Some(symbol))
        .count()
}
