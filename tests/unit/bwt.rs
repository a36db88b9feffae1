//! BWT construction, C table and inverse transform.

use super::common::{assert_index_well_formed, build, edge_texts, ABRACADABRA, BANANA};
use bwtsearch::{build_bwt, naive_bwt, sais, CTable, IndexError, SuffixArrayDefect};

#[test]
fn banana_bwt_and_sentinel_row() {
    let (bwt, _) = build_bwt(BANANA, &sais(BANANA)).unwrap();
    assert_eq!(bwt.to_display_string(), "annb$aa");
    assert_eq!(bwt.sentinel_row(), 4);
    assert_eq!(bwt.len(), 7);
    assert_eq!(bwt.symbol_at(4), None);
    assert_eq!(bwt.symbol_at(3), Some(b'b'));
    assert_eq!(bwt.symbol_at(7), None);
}

#[test]
fn abracadabra_bwt() {
    let (bwt, _) = build_bwt(ABRACADABRA, &sais(ABRACADABRA)).unwrap();
    assert_eq!(bwt.to_display_string(), "ard$rcaaaabb");
}

#[test]
fn suffix_array_route_matches_rotation_sort() {
    for text in edge_texts() {
        let (bwt, _) = build_bwt(&text, &sais(&text)).unwrap();
        assert_eq!(bwt, naive_bwt(&text), "text {:?}", text);
    }
}

#[test]
fn c_table_counts_sentinel_first() {
    let c = CTable::from_text(BANANA);
    assert_eq!(c.get(b'a'), 1);
    assert_eq!(c.get(b'b'), 4);
    assert_eq!(c.get(b'n'), 5);
    // Bytes above the largest symbol start after every row
    assert_eq!(c.get(b'z'), 7);
    assert_eq!(c.get(0), 1);
    assert_eq!(c.rows(), 7);
    assert_eq!(c.occurrences(b'a'), 3);
    assert_eq!(c.occurrences(b'z'), 0);
}

#[test]
fn bwt_is_permutation_of_text() {
    for text in edge_texts() {
        let (bwt, _) = build_bwt(&text, &sais(&text)).unwrap();
        let mut from_bwt: Vec<u8> = bwt.symbols().flatten().collect();
        let mut sorted = text.clone();
        from_bwt.sort_unstable();
        sorted.sort_unstable();
        assert_eq!(from_bwt, sorted);
        assert_eq!(bwt.symbols().filter(Option::is_none).count(), 1);
    }
}

#[test]
fn build_bwt_rejects_wrong_length() {
    let err = build_bwt(b"abc", &[3, 0, 1]).unwrap_err();
    assert!(matches!(
        err,
        IndexError::InvalidSuffixArray(SuffixArrayDefect::WrongLength {
            expected: 4,
            actual: 3
        })
    ));
    assert!(err.to_string().starts_with("invalid suffix array"));
}

#[test]
fn inverse_bwt_round_trips() {
    for text in edge_texts() {
        let index = build(&text);
        assert_eq!(index.reconstruct_text(), text);
    }
}

#[test]
fn edge_texts_are_well_formed() {
    for text in edge_texts() {
        assert_index_well_formed(&text, &build(&text));
    }
}
