//! Differential tests: every query against a brute-force scan.

use super::common::{hamming_occurrences, naive_occurrences};
use super::strategies::{any_text, text_and_pattern, text_with_substring};
use bwtsearch::{approximate_match, FmIndex};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Exact search finds exactly the offsets a window scan finds.
    #[test]
    fn prop_exact_matches_scan((text, pattern) in text_with_substring(150)) {
        let index = FmIndex::build(&text).unwrap();
        prop_assert_eq!(index.exact_positions(&pattern), naive_occurrences(&text, &pattern));
    }

    /// A substring of the text is always found at its own offset.
    #[test]
    fn prop_substring_found((text, pattern) in text_with_substring(150)) {
        prop_assume!(!pattern.is_empty());
        let index = FmIndex::build(&text).unwrap();
        prop_assert!(index.count(&pattern) >= 1);
    }

    /// Unrelated patterns: present or absent, the answer matches the scan.
    #[test]
    fn prop_exact_arbitrary_pattern((text, pattern) in text_and_pattern(150)) {
        let index = FmIndex::build(&text).unwrap();
        let expected = naive_occurrences(&text, &pattern);
        prop_assert_eq!(index.exact_positions(&pattern), expected.clone());
        if !pattern.is_empty() {
            prop_assert_eq!(index.count(&pattern), expected.len());
        }
    }

    /// Bounded-mismatch search equals a Hamming-distance window scan.
    #[test]
    fn prop_approximate_matches_scan(
        (text, pattern) in text_and_pattern(120),
        k in 0usize..4,
    ) {
        let index = FmIndex::build(&text).unwrap();
        prop_assert_eq!(
            index.search(&pattern, k as i64).unwrap(),
            hamming_occurrences(&text, &pattern, k)
        );
    }

    /// k = 0 reports the exact interval and nothing else.
    #[test]
    fn prop_zero_budget_is_exact((text, pattern) in text_and_pattern(120)) {
        let index = FmIndex::build(&text).unwrap();
        let intervals = approximate_match(&index, &pattern, 0).unwrap();
        let exact = index.exact_match(&pattern);
        let expected = if exact.is_empty() { vec![] } else { vec![exact] };
        prop_assert_eq!(intervals, expected);
    }

    /// Raising the budget never loses a hit.
    #[test]
    fn prop_monotonic_in_budget((text, pattern) in text_and_pattern(100), k in 0i64..4) {
        let index = FmIndex::build(&text).unwrap();
        let smaller = index.search(&pattern, k).unwrap();
        let larger = index.search(&pattern, k + 1).unwrap();
        for position in smaller {
            prop_assert!(larger.binary_search(&position).is_ok());
        }
    }

    /// Results are sorted, unique and in range.
    #[test]
    fn prop_positions_sorted_and_in_range(text in any_text(120), pattern in any_text(4), k in 0i64..3) {
        let index = FmIndex::build(&text).unwrap();
        let positions = index.search(&pattern, k).unwrap();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(positions.iter().all(|&p| p + pattern.len() <= text.len()));
    }

    /// Emitted intervals never overlap.
    #[test]
    fn prop_intervals_disjoint((text, pattern) in text_and_pattern(100), k in 0i64..4) {
        let index = FmIndex::build(&text).unwrap();
        let mut intervals = approximate_match(&index, &pattern, k).unwrap();
        intervals.sort_by_key(|i| i.lo);
        for pair in intervals.windows(2) {
            prop_assert!(pair[0].hi <= pair[1].lo);
        }
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The rayon search returns the same intervals in the same order.
    #[test]
    fn prop_parallel_matches_sequential((text, pattern) in text_and_pattern(200), k in 0i64..4) {
        let index = FmIndex::build(&text).unwrap();
        prop_assert_eq!(
            bwtsearch::approximate_match_parallel(&index, &pattern, k).unwrap(),
            approximate_match(&index, &pattern, k).unwrap()
        );
    }
}
