// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burrows-Wheeler full-text index with exact and bounded-mismatch search.
//!
//! Build once over a static byte text, then answer "where does this pattern
//! occur?" in time proportional to the pattern, not the text. Patterns may
//! also be matched with up to `k` substitutions (Hamming distance).
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌───────────────┐   ┌──────────────┐   ┌────────────┐
//! │    text    │──▶│ suffix array  │──▶│  BWT + C     │──▶│ RankIndex  │
//! │  (&[u8])   │   │ (SA-IS/naive) │   │  (bwt.rs)    │   │ (rank.rs)  │
//! └────────────┘   └───────────────┘   └──────────────┘   └────────────┘
//!                                                                │
//!                      ┌─────────────────────────────────────────┘
//!                      ▼
//! ┌──────────────────────────────┐   ┌─────────────────────────────────┐
//! │  exact / approximate search  │──▶│  resolve: rows → sorted offsets │
//! │  (search/*.rs)               │   │  (search/resolve.rs)            │
//! └──────────────────────────────┘   └─────────────────────────────────┘
//! ```
//!
//! Everything is frozen inside an [`FmIndex`] once built. The handle is
//! `Send + Sync` and queries only read it.
//!
//! # Usage
//!
//! ```
//! use bwtsearch::FmIndex;
//!
//! let index = FmIndex::build(b"abracadabra").unwrap();
//! assert_eq!(index.search(b"abra", 0).unwrap(), vec![0, 7]);
//! assert_eq!(index.count(b"a"), 5);
//!
//! // "aca" and "ada" are one substitution away from "aba"
//! assert_eq!(index.search(b"aba", 1).unwrap(), vec![0, 3, 5, 7]);
//! ```
//!
//! # Features
//!
//! | Feature      | Default | Enables                                        |
//! |--------------|---------|------------------------------------------------|
//! | `parallel`   | yes     | rayon-backed [`approximate_match_parallel`]    |
//! | `serde_json` | yes     | JSON output in the `bwtsearch` binary          |

pub mod binary;
mod index;
mod search;
pub mod testing;
mod types;
pub mod verify;

pub use index::{
    build_bwt, naive_bwt, sais, validate_suffix_array, Alphabet, Bwt, CTable, FmIndex,
    NaiveSuffixArray, RankIndex, SaisSuffixArray, SuffixArraySupplier, SENTINEL_DISPLAY,
};
#[cfg(feature = "parallel")]
pub use search::approximate_match_parallel;
pub use search::{
    approximate_match, count, exact_match, exact_match_positions, inexact_match_positions,
    resolve, search,
};
pub use types::{IndexConfig, SearchInterval, DEFAULT_CHECKPOINT_INTERVAL};
pub use verify::{IndexError, MismatchBudget, SuffixArrayDefect};
