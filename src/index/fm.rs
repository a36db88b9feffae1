// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The immutable index handle.
//!
//! An [`FmIndex`] owns the suffix array, the C table and the rank index (which
//! in turn owns the BWT and alphabet). It is built in one shot and never
//! mutated afterwards, so a shared reference can serve any number of
//! concurrent queries.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ATOMIC_BUILD**: every constructor returns either a complete index or an
//!    error. Nothing partially built escapes.
//! 2. **SA_VALID**: `suffix_array` passed `validate_suffix_array` against the
//!    indexed text.
//! 3. **ROWS_ALIGNED**: `suffix_array.len() == bwt.len() == c_table.rows()`.

use std::time::Instant;

use tracing::debug;

use super::alphabet::Alphabet;
use super::bwt::{build_bwt, Bwt, CTable};
use super::rank::RankIndex;
use super::suffix_array::{SaisSuffixArray, SuffixArraySupplier};
use crate::types::{IndexConfig, SearchInterval};
use crate::verify::IndexError;

/// A Burrows-Wheeler index over one byte text.
#[derive(Debug, Clone)]
pub struct FmIndex {
    suffix_array: Vec<usize>,
    c_table: CTable,
    rank: RankIndex,
    config: IndexConfig,
}

impl FmIndex {
    /// Build with the default configuration and the SA-IS supplier.
    pub fn build(text: &[u8]) -> Result<Self, IndexError> {
        Self::build_with(text, &IndexConfig::default(), &SaisSuffixArray)
    }

    /// Build with an explicit configuration and suffix array supplier.
    pub fn build_with(
        text: &[u8],
        config: &IndexConfig,
        supplier: &dyn SuffixArraySupplier,
    ) -> Result<Self, IndexError> {
        config.validate()?;
        let started = Instant::now();
        let suffix_array = supplier.suffix_array(text);
        debug!(
            supplier = supplier.name(),
            text_len = text.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "suffix array built"
        );
        Self::from_suffix_array(text, suffix_array, config)
    }

    /// Build from an externally supplied suffix array.
    ///
    /// The array must contain `text.len() + 1` entries with the sentinel
    /// position first; it is validated in O(n) before use.
    pub fn from_suffix_array(
        text: &[u8],
        suffix_array: Vec<usize>,
        config: &IndexConfig,
    ) -> Result<Self, IndexError> {
        config.validate()?;
        let started = Instant::now();

        let (bwt, c_table) = build_bwt(text, &suffix_array)?;
        let alphabet = Alphabet::from_text(text);
        let sigma = alphabet.len();
        let rank = RankIndex::new(bwt, alphabet, config.checkpoint_interval)?;

        debug!(
            text_len = text.len(),
            alphabet = sigma,
            checkpoint_interval = config.checkpoint_interval,
            checkpoint_bytes = rank.checkpoint_bytes(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "index built"
        );

        Ok(Self {
            suffix_array,
            c_table,
            rank,
            config: *config,
        })
    }

    /// Length of the indexed text (sentinel excluded).
    pub fn text_len(&self) -> usize {
        self.suffix_array.len() - 1
    }

    /// Number of suffix array rows (text length plus the sentinel).
    pub fn rows(&self) -> usize {
        self.suffix_array.len()
    }

    /// Interval covering every row; the starting point of backward search.
    pub fn full_interval(&self) -> SearchInterval {
        SearchInterval::full(self.rows())
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    pub fn bwt(&self) -> &Bwt {
        self.rank.bwt()
    }

    pub fn c_table(&self) -> &CTable {
        &self.c_table
    }

    pub fn rank_index(&self) -> &RankIndex {
        &self.rank
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.rank.alphabet()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// LF mapping: the row of the suffix one position to the left.
    ///
    /// `None` for the sentinel row, whose suffix starts at text position 0.
    #[inline]
    pub fn lf(&self, row: usize) -> Option<usize> {
        let symbol = self.bwt().symbol_at(row)?;
        Some(self.c_table.get(symbol) + self.rank.occ(symbol, row))
    }

    /// Recover the text from the BWT alone (inverse transform).
    pub fn reconstruct_text(&self) -> Vec<u8> {
        invert_bwt(&self.rank, &self.c_table).unwrap_or_default()
    }
}

/// Walk LF from the sentinel suffix (row 0) back to position 0.
///
/// Returns `None` if the walk reaches the sentinel row early, which only
/// happens for byte sequences that are not the BWT of any text.
pub(crate) fn invert_bwt(rank: &RankIndex, c_table: &CTable) -> Option<Vec<u8>> {
    let text_len = rank.len().checked_sub(1)?;
    let bwt = rank.bwt();
    let mut text = vec![0u8; text_len];
    let mut row = 0;
    for position in (0..text_len).rev() {
        let symbol = bwt.symbol_at(row)?;
        text[position] = symbol;
        row = c_table.get(symbol) + rank.occ(symbol, row);
    }
    (row == bwt.sentinel_row()).then_some(text)
}
