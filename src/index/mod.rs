// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make search fast.
//!
//! Built leaves first:
//! - **Suffix array**: supplied by a pluggable [`SuffixArraySupplier`]
//! - **BWT + C table**: derived from text and suffix array in one pass
//! - **Rank index**: checkpointed occurrence counts over the BWT
//! - **FmIndex**: the frozen handle that owns all of the above

mod alphabet;
mod bwt;
mod fm;
mod rank;
mod sais;
mod suffix_array;

pub use alphabet::Alphabet;
pub use bwt::{build_bwt, naive_bwt, Bwt, CTable, SENTINEL_DISPLAY};
pub use fm::FmIndex;
pub(crate) use fm::invert_bwt;
pub use rank::RankIndex;
pub use sais::sais;
pub use suffix_array::{
    validate_suffix_array, NaiveSuffixArray, SaisSuffixArray, SuffixArraySupplier,
};
