//! Checkpointed rank queries.

use super::common::{brute_rank, random_text, MISSISSIPPI};
use bwtsearch::{
    build_bwt, sais, Alphabet, FmIndex, IndexConfig, IndexError, RankIndex, SaisSuffixArray,
    DEFAULT_CHECKPOINT_INTERVAL,
};

fn index_with_interval(text: &[u8], interval: usize) -> FmIndex {
    let config = IndexConfig::default().with_checkpoint_interval(interval);
    FmIndex::build_with(text, &config, &SaisSuffixArray).unwrap()
}

#[test]
fn default_interval() {
    let index = FmIndex::build(MISSISSIPPI).unwrap();
    assert_eq!(index.config().checkpoint_interval, DEFAULT_CHECKPOINT_INTERVAL);
    assert_eq!(index.rank_index().checkpoint_interval(), 64);
}

#[test]
fn rank_matches_brute_force_across_intervals() {
    let text = random_text(500, b"ACGT", 42);
    for interval in [1, 2, 7, 64, 499, 501, 1000] {
        let index = index_with_interval(&text, interval);
        let rank = index.rank_index();
        for &symbol in index.alphabet().symbols() {
            for position in (0..=rank.len()).step_by(13).chain([rank.len()]) {
                assert_eq!(
                    rank.rank(symbol, position).unwrap(),
                    brute_rank(index.bwt(), symbol, position),
                    "interval {} symbol {} position {}",
                    interval,
                    symbol as char,
                    position
                );
            }
        }
    }
}

#[test]
fn rank_recurrence() {
    // rank(s, i) == rank(s, i - 1) + [BWT[i - 1] == s]
    let index = index_with_interval(MISSISSIPPI, 3);
    let rank = index.rank_index();
    for &symbol in index.alphabet().symbols() {
        assert_eq!(rank.rank(symbol, 0).unwrap(), 0);
        for i in 1..=rank.len() {
            let step = usize::from(rank.symbol_at(i - 1) == Some(symbol));
            assert_eq!(
                rank.rank(symbol, i).unwrap(),
                rank.rank(symbol, i - 1).unwrap() + step
            );
        }
    }
}

#[test]
fn total_rank_equals_c_bucket_width() {
    let index = FmIndex::build(MISSISSIPPI).unwrap();
    let rows = index.rows();
    for &symbol in index.alphabet().symbols() {
        assert_eq!(
            index.rank_index().rank(symbol, rows).unwrap(),
            index.c_table().occurrences(symbol)
        );
    }
}

#[test]
fn out_of_range_position() {
    let index = FmIndex::build(MISSISSIPPI).unwrap();
    let err = index.rank_index().rank(b's', 13).unwrap_err();
    assert!(matches!(
        err,
        IndexError::OutOfRange {
            position: 13,
            len: 12
        }
    ));
    // The index is untouched by the failed query
    assert_eq!(index.rank_index().rank(b's', 12).unwrap(), 4);
}

#[test]
fn checkpoint_memory_shrinks_with_interval() {
    let text = random_text(4096, b"abcdefgh", 9);
    let dense = index_with_interval(&text, 4);
    let sparse = index_with_interval(&text, 256);
    assert!(dense.rank_index().checkpoint_bytes() > sparse.rank_index().checkpoint_bytes());
    assert_eq!(dense.rank_index().checkpoint_count(), 4097 / 4 + 1);
    assert_eq!(sparse.rank_index().checkpoint_count(), 4097 / 256 + 1);
}

#[test]
fn zero_interval_rejected() {
    let config = IndexConfig::default().with_checkpoint_interval(0);
    assert!(matches!(
        FmIndex::build_with(MISSISSIPPI, &config, &SaisSuffixArray),
        Err(IndexError::InvalidConfig { .. })
    ));
}

#[test]
fn rank_index_constructor_rejects_zero_interval() {
    let (bwt, _) = build_bwt(MISSISSIPPI, &sais(MISSISSIPPI)).unwrap();
    let result = RankIndex::new(bwt.clone(), Alphabet::from_text(MISSISSIPPI), 0);
    assert!(matches!(result, Err(IndexError::InvalidConfig { .. })));

    let rank = RankIndex::new(bwt, Alphabet::from_text(MISSISSIPPI), 5).unwrap();
    assert_eq!(rank.rank(b's', rank.len()).unwrap(), 4);
}
