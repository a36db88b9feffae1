//! Exact backward search.

use super::common::{build, edge_texts, random_text, naive_occurrences, ABRACADABRA, DNA, MISSISSIPPI};
use bwtsearch::{count, exact_match, SearchInterval};

#[test]
fn abracadabra_abra() {
    let index = build(ABRACADABRA);
    let interval = exact_match(&index, b"abra");
    assert_eq!(interval.len(), 2);
    assert_eq!(index.resolve(&[interval]).unwrap(), vec![0, 7]);
    assert_eq!(index.count(b"abra"), 2);
}

#[test]
fn mississippi_patterns() {
    let index = build(MISSISSIPPI);
    assert_eq!(index.exact_positions(b"ssi"), vec![2, 5]);
    assert_eq!(index.exact_positions(b"issi"), vec![1, 4]);
    assert_eq!(index.exact_positions(b"i"), vec![1, 4, 7, 10]);
    assert_eq!(index.exact_positions(b"mississippi"), vec![0]);
    assert!(index.exact_positions(b"mississippis").is_empty());
    assert!(index.exact_positions(b"spa").is_empty());
}

#[test]
fn interval_is_contiguous_block_of_matching_rows() {
    let index = build(MISSISSIPPI);
    let interval = index.exact_match(b"si");
    // Rows are sorted suffixes, so every row in the block starts with "si"
    for &offset in &index.suffix_array()[interval.rows()] {
        assert!(MISSISSIPPI[offset..].starts_with(b"si"));
    }
    assert_eq!(interval.len(), 2);
}

#[test]
fn matches_naive_scan_on_generated_text() {
    let text = random_text(3000, b"ACGT", 5);
    let index = build(&text);
    for start in (0..2900).step_by(97) {
        for len in [1, 3, 8, 20] {
            let pattern = &text[start..start + len];
            assert_eq!(
                index.exact_positions(pattern),
                naive_occurrences(&text, pattern),
                "pattern at {} len {}",
                start,
                len
            );
        }
    }
}

#[test]
fn absent_patterns_give_empty_interval() {
    let index = build(DNA);
    for pattern in [&b"ACGTACGTACGTACGT"[..], b"N", b"acgt", b"GGGGG"] {
        assert!(exact_match(&index, pattern).is_empty());
        assert_eq!(count(&index, pattern), 0);
    }
}

#[test]
fn count_agrees_with_positions_for_nonempty_patterns() {
    for text in edge_texts() {
        let index = build(&text);
        for len in 1..=3usize.min(text.len()) {
            for start in 0..=text.len() - len {
                let pattern = &text[start..start + len];
                assert_eq!(index.count(pattern), index.exact_positions(pattern).len());
            }
        }
    }
}

#[test]
fn empty_pattern_matches_every_row() {
    let index = build(ABRACADABRA);
    assert_eq!(index.exact_match(b""), SearchInterval::new(0, 12));
    assert_eq!(index.count(b""), 12);
    assert_eq!(index.exact_positions(b""), (0..11).collect::<Vec<_>>());
}
