//! The build-and-search helpers for single lookups.

use super::common::{hamming_occurrences, random_text};
use bwtsearch::{exact_match_positions, inexact_match_positions, IndexError};

#[test]
fn exact_helper() {
    assert_eq!(exact_match_positions(b"abc", b"abcabcabc").unwrap(), vec![0, 3, 6]);
    assert_eq!(exact_match_positions(b"bca", b"abcabcabc").unwrap(), vec![1, 4]);
    assert!(exact_match_positions(b"abd", b"abcabcabc").unwrap().is_empty());
    assert_eq!(exact_match_positions(b"", b"abc").unwrap(), vec![0, 1, 2]);
}

#[test]
fn inexact_helper() {
    assert_eq!(inexact_match_positions(b"abc", b"abcabd", 1).unwrap(), vec![0, 3]);
    assert_eq!(inexact_match_positions(b"abc", b"abcabd", 0).unwrap(), vec![0]);
    assert_eq!(
        inexact_match_positions(b"xyz", b"abcabd", 3).unwrap(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn inexact_helper_rejects_negative_budget() {
    let err = inexact_match_positions(b"abc", b"abcabd", -2).unwrap_err();
    assert!(matches!(err, IndexError::InvalidBudget { requested: -2 }));
    assert_eq!(err.to_string(), "mismatch budget must be >= 0, got -2");
}

#[test]
fn helpers_agree_with_scan() {
    let reference = random_text(2_000, b"ACGT", 31);
    for start in (0..1_980).step_by(250) {
        let query = &reference[start..start + 9];
        assert_eq!(
            inexact_match_positions(query, &reference, 2).unwrap(),
            hamming_occurrences(&reference, query, 2)
        );
    }
}
