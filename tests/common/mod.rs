//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bwtsearch::{naive_bwt, validate_suffix_array, FmIndex};
use proptest::prelude::Rng;
use proptest::test_runner::{RngAlgorithm, TestRng};

// Re-export canonical oracles from bwtsearch::testing
pub use bwtsearch::testing::{brute_rank, hamming_occurrences, naive_occurrences};

// ============================================================================
// FIXTURES
// ============================================================================

pub const ABRACADABRA: &[u8] = b"abracadabra";
pub const BANANA: &[u8] = b"banana";
pub const MISSISSIPPI: &[u8] = b"mississippi";

/// Short DNA-like text with plenty of repeats and near-repeats.
pub const DNA: &[u8] = b"ACGTACGTTGCAACGTAGCTAGCTAACGGTACGTACCTTGACGTACGTAGG";

/// Texts exercising the awkward corners: empty, single byte, one repeated
/// symbol, NUL bytes (which share a byte value with the sentinel placeholder)
/// and the full byte range.
pub fn edge_texts() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        b"a".to_vec(),
        b"aaaaaaaa".to_vec(),
        b"\x00\x00\x00".to_vec(),
        b"a\x00b\x00a\x00".to_vec(),
        (0..=255u8).collect(),
        (0..=255u8).rev().collect(),
        BANANA.to_vec(),
        ABRACADABRA.to_vec(),
        MISSISSIPPI.to_vec(),
    ]
}

/// Reproducible random text over `alphabet`, drawn from proptest's ChaCha
/// generator so every run of a test sees the same bytes for the same seed.
pub fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&seed.to_le_bytes());
    let mut rng = TestRng::from_seed(RngAlgorithm::ChaCha, &key);
    (0..len)
        .map(|_| alphabet[rng.next_u32() as usize % alphabet.len()])
        .collect()
}

// ============================================================================
// BUILDERS AND ASSERTIONS
// ============================================================================

/// Build an index, panicking with the text on failure.
pub fn build(text: &[u8]) -> FmIndex {
    FmIndex::build(text)
        .unwrap_or_else(|e| panic!("build failed for {:?}: {}", String::from_utf8_lossy(text), e))
}

/// Check every structural invariant of `index` against `text`.
pub fn assert_index_well_formed(text: &[u8], index: &FmIndex) {
    assert_eq!(index.text_len(), text.len());
    assert_eq!(index.rows(), text.len() + 1);
    assert_eq!(index.suffix_array()[0], text.len(), "sentinel suffix must sort first");
    validate_suffix_array(text, index.suffix_array()).expect("suffix array must be valid");

    assert_eq!(index.bwt(), &naive_bwt(text), "BWT differs from rotation sort");
    assert_eq!(index.reconstruct_text(), text, "inverse BWT differs from text");

    let c_table = index.c_table();
    assert_eq!(c_table.rows(), index.rows());
    for symbol in 0..=255u8 {
        let smaller = text.iter().filter(|&&b| b < symbol).count();
        assert_eq!(c_table.get(symbol), 1 + smaller, "C[{:#04x}]", symbol);
    }

    let rank = index.rank_index();
    for &symbol in index.alphabet().symbols() {
        for position in 0..=rank.len() {
            assert_eq!(
                rank.rank(symbol, position).unwrap(),
                brute_rank(index.bwt(), symbol, position),
                "rank({:#04x}, {})",
                symbol,
                position
            );
        }
    }
}
