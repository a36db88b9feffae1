//! A built index is immutable and can serve queries from many threads.

use super::common::{hamming_occurrences, random_text, naive_occurrences};
use bwtsearch::FmIndex;
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_queries_from_std_threads() {
    let text = Arc::new(random_text(20_000, b"ACGT", 4));
    let index = Arc::new(FmIndex::build(&text).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let index = Arc::clone(&index);
            let text = Arc::clone(&text);
            thread::spawn(move || {
                for i in 0..25 {
                    let start = (worker * 2_311 + i * 613) % (text.len() - 12);
                    let pattern = &text[start..start + 12];
                    assert_eq!(index.exact_positions(pattern), naive_occurrences(&text, pattern));
                    assert_eq!(
                        index.search(pattern, 1).unwrap(),
                        hamming_occurrences(&text, pattern, 1)
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn scoped_threads_borrow_the_index() {
    let text = random_text(5_000, b"abcdefgh", 12);
    let index = FmIndex::build(&text).unwrap();
    let patterns: Vec<&[u8]> = (0..16).map(|i| &text[i * 300..i * 300 + 6]).collect();

    let index = &index;
    let counts: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = patterns
            .iter()
            .map(|&pattern| scope.spawn(move || index.count(pattern)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (pattern, count) in patterns.iter().zip(counts) {
        assert_eq!(count, naive_occurrences(&text, pattern).len());
    }
}

#[cfg(feature = "parallel")]
#[test]
fn rayon_batch_queries() {
    use rayon::prelude::*;

    let text = random_text(20_000, b"ACGT", 8);
    let index = FmIndex::build(&text).unwrap();
    let starts: Vec<usize> = (0..64).map(|i| i * 311).collect();

    let results: Vec<Vec<usize>> = starts
        .par_iter()
        .map(|&start| index.search(&text[start..start + 10], 2).unwrap())
        .collect();

    for (&start, positions) in starts.iter().zip(&results) {
        let pattern = &text[start..start + 10];
        assert_eq!(positions, &hamming_occurrences(&text, pattern, 2));
    }
}
