// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential fuzzing of search against a window scan.
//!
//! Texts and patterns are arbitrary bytes, NUL included. The index must agree
//! with the brute-force Hamming scan for every budget, and the parallel
//! search must agree with the sequential one.

#![no_main]

use arbitrary::Arbitrary;
use bwtsearch::testing::hamming_occurrences;
use bwtsearch::{approximate_match, FmIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
    budget: i8,
}

fuzz_target!(|input: Input| {
    // Keep the search tree small enough for the fuzzer to iterate quickly
    if input.text.len() > 512 || input.pattern.len() > 16 {
        return;
    }
    let index = FmIndex::build(&input.text).expect("build never fails on plain bytes");
    let budget = i64::from(input.budget);

    let result = index.search(&input.pattern, budget);
    if budget < 0 {
        assert!(result.is_err());
        return;
    }
    let k = (budget as usize).min(3);
    assert_eq!(
        index.search(&input.pattern, k as i64).expect("non-negative budget"),
        hamming_occurrences(&input.text, &input.pattern, k)
    );

    assert_eq!(
        bwtsearch::approximate_match_parallel(&index, &input.pattern, k as i64).expect("budget"),
        approximate_match(&index, &input.pattern, k as i64).expect("budget")
    );
});
