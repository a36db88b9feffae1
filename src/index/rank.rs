// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checkpointed rank queries over the BWT.
//!
//! `rank(s, i)` counts `s` in `BWT[0..i)`. Storing the answer for every `i`
//! costs `alphabet * n` words, so we only store it every `B` rows and scan the
//! rest:
//!
//! ```text
//! rows:        0 1 2 3 | 4 5 6 7 | 8 9 10
//! checkpoint:  k=0       k=1       k=2        (B = 4)
//!
//! rank(s, 7) = checkpoint[1][s] + count(s in BWT[4..7))
//! ```
//!
//! A query touches one checkpoint and at most `B - 1` rows. Memory is
//! `alphabet * (n / B + 1)` words.

use super::alphabet::Alphabet;
use super::bwt::{Bwt, SENTINEL_PLACEHOLDER};
use crate::types::check_checkpoint_interval;
use crate::verify::{contracts, IndexError};

/// BWT plus per-symbol occurrence checkpoints.
#[derive(Debug, Clone)]
pub struct RankIndex {
    bwt: Bwt,
    alphabet: Alphabet,
    interval: usize,
    /// Flattened `[checkpoint][symbol code]` counts.
    checkpoints: Vec<usize>,
}

impl RankIndex {
    /// Precompute checkpoints every `interval` rows for every alphabet symbol.
    ///
    /// Fails with `InvalidConfig` when `interval` is 0.
    pub fn new(bwt: Bwt, alphabet: Alphabet, interval: usize) -> Result<Self, IndexError> {
        check_checkpoint_interval(interval)?;
        let sigma = alphabet.len();
        let len = bwt.len();
        let mut checkpoints = Vec::with_capacity((len / interval + 1) * sigma);
        let mut running = vec![0usize; sigma];

        for (row, symbol) in bwt.symbols().enumerate() {
            if row % interval == 0 {
                checkpoints.extend_from_slice(&running);
            }
            if let Some(code) = symbol.and_then(|s| alphabet.code(s)) {
                running[code] += 1;
            }
        }
        if len % interval == 0 {
            checkpoints.extend_from_slice(&running);
        }

        let rank = Self {
            bwt,
            alphabet,
            interval,
            checkpoints,
        };
        contracts::check_checkpoints(&rank);
        Ok(rank)
    }

    /// Count of `symbol` in `BWT[0..position)`.
    ///
    /// Fails with `OutOfRange` when `position > len()`. Symbols outside the
    /// alphabet have rank 0.
    pub fn rank(&self, symbol: u8, position: usize) -> Result<usize, IndexError> {
        if position > self.bwt.len() {
            return Err(IndexError::OutOfRange {
                position,
                len: self.bwt.len(),
            });
        }
        Ok(self.occ(symbol, position))
    }

    /// Unchecked rank for callers that already hold a valid position.
    #[inline]
    pub(crate) fn occ(&self, symbol: u8, position: usize) -> usize {
        let Some(code) = self.alphabet.code(symbol) else {
            return 0;
        };
        let block = position / self.interval;
        let start = block * self.interval;
        let base = self.checkpoints[block * self.alphabet.len() + code];

        let rows = &self.bwt.as_bytes()[start..position];
        let mut count = base + rows.iter().filter(|&&byte| byte == symbol).count();

        // The placeholder byte in the sentinel row is not a real occurrence
        let sentinel = self.bwt.sentinel_row();
        if symbol == SENTINEL_PLACEHOLDER && (start..position).contains(&sentinel) {
            count -= 1;
        }
        count
    }

    /// Checkpointed count of `symbol` at row `checkpoint * interval`.
    pub fn checkpoint(&self, checkpoint: usize, symbol: u8) -> Option<usize> {
        let code = self.alphabet.code(symbol)?;
        self.checkpoints
            .get(checkpoint * self.alphabet.len() + code)
            .copied()
    }

    /// Number of checkpoint rows stored.
    pub fn checkpoint_count(&self) -> usize {
        if self.alphabet.is_empty() {
            return self.bwt.len() / self.interval + 1;
        }
        self.checkpoints.len() / self.alphabet.len()
    }

    pub fn checkpoint_interval(&self) -> usize {
        self.interval
    }

    /// Bytes held by the checkpoint table.
    pub fn checkpoint_bytes(&self) -> usize {
        self.checkpoints.len() * std::mem::size_of::<usize>()
    }

    pub fn bwt(&self) -> &Bwt {
        &self.bwt
    }

    /// See [`Bwt::symbol_at`].
    #[inline]
    pub fn symbol_at(&self, row: usize) -> Option<u8> {
        self.bwt.symbol_at(row)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of BWT rows.
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }
}
