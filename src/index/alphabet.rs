// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The set of bytes that actually occur in the text.
//!
//! Rank checkpoints are only stored for these symbols, so a DNA text pays for
//! four columns instead of 256. Each symbol gets a dense code in ascending
//! byte order; searches walk `symbols()` in that same order, which is what
//! makes approximate search output reproducible.

/// Sorted distinct bytes of a text, with a dense code per byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    codes: [Option<u8>; 256],
}

impl Alphabet {
    /// Collect the alphabet of `text`.
    pub fn from_text(text: &[u8]) -> Self {
        let mut seen = [false; 256];
        for &byte in text {
            seen[byte as usize] = true;
        }
        Self::from_presence(&seen)
    }

    /// Build from per-byte presence flags.
    pub(crate) fn from_presence(seen: &[bool; 256]) -> Self {
        let mut symbols = Vec::new();
        let mut codes = [None; 256];
        for (byte, &present) in seen.iter().enumerate() {
            if present {
                codes[byte] = Some(symbols.len() as u8);
                symbols.push(byte as u8);
            }
        }
        Self { symbols, codes }
    }

    /// Number of distinct symbols (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in ascending byte order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.codes[symbol as usize].is_some()
    }

    /// Dense code of `symbol`, or `None` if it never occurs in the text.
    #[inline]
    pub fn code(&self, symbol: u8) -> Option<usize> {
        self.codes[symbol as usize].map(usize::from)
    }
}
