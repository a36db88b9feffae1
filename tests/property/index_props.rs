//! Structural invariants of built indexes.

use super::common::{assert_index_well_formed, brute_rank};
use super::strategies::{any_text, checkpoint_interval, small_alphabet_text};
use bwtsearch::{
    validate_suffix_array, FmIndex, IndexConfig, NaiveSuffixArray, SaisSuffixArray,
    SuffixArraySupplier,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// SA-IS and the comparison sort produce the same suffix array.
    #[test]
    fn prop_sais_matches_naive(text in small_alphabet_text(300)) {
        prop_assert_eq!(
            SaisSuffixArray.suffix_array(&text),
            NaiveSuffixArray.suffix_array(&text)
        );
    }

    #[test]
    fn prop_sais_matches_naive_any_bytes(text in any_text(200)) {
        prop_assert_eq!(
            SaisSuffixArray.suffix_array(&text),
            NaiveSuffixArray.suffix_array(&text)
        );
    }

    /// Every built index satisfies every structural invariant.
    #[test]
    fn prop_index_well_formed(text in small_alphabet_text(120)) {
        let index = FmIndex::build(&text).unwrap();
        assert_index_well_formed(&text, &index);
    }

    /// The inverse BWT reproduces the text.
    #[test]
    fn prop_reconstruct_roundtrip(text in any_text(300)) {
        let index = FmIndex::build(&text).unwrap();
        prop_assert_eq!(index.reconstruct_text(), text);
    }

    /// Any swap of two SA rows on a text with distinct suffixes is rejected.
    #[test]
    fn prop_swapped_rows_rejected(text in small_alphabet_text(60), a in 0usize..61, b in 0usize..61) {
        let mut sa = SaisSuffixArray.suffix_array(&text);
        let (a, b) = (a % sa.len(), b % sa.len());
        prop_assume!(a != b);
        sa.swap(a, b);
        prop_assert!(validate_suffix_array(&text, &sa).is_err());
    }

    /// Rank answers do not depend on checkpoint spacing.
    #[test]
    fn prop_rank_independent_of_interval(
        text in small_alphabet_text(200),
        interval in checkpoint_interval(),
    ) {
        let config = IndexConfig::default().with_checkpoint_interval(interval);
        let index = FmIndex::build_with(&text, &config, &SaisSuffixArray).unwrap();
        let rank = index.rank_index();
        for &symbol in index.alphabet().symbols() {
            for position in 0..=rank.len() {
                prop_assert_eq!(
                    rank.rank(symbol, position).unwrap(),
                    brute_rank(index.bwt(), symbol, position)
                );
            }
        }
    }

    /// LF maps each non-sentinel row to the row of the preceding suffix.
    #[test]
    fn prop_lf_steps_back_one_position(text in small_alphabet_text(100)) {
        let index = FmIndex::build(&text).unwrap();
        let sa = index.suffix_array();
        let mut row_of = vec![0; sa.len()];
        for (row, &offset) in sa.iter().enumerate() {
            row_of[offset] = row;
        }
        for row in 0..index.rows() {
            match index.lf(row) {
                Some(prev) => prop_assert_eq!(prev, row_of[sa[row] - 1]),
                None => prop_assert_eq!(sa[row], 0),
            }
        }
    }
}
