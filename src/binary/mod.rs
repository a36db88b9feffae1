// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format for persisted indexes.
//!
//! Building an index costs a suffix array sort. Loading one should not. The
//! file stores the two things that cannot be recomputed cheaply from each
//! other: the BWT (one byte per row) and the suffix array (LEB128 varints).
//! The text is *not* stored; it falls out of the BWT by inversion.
//!
//! # Security Considerations
//!
//! This format is designed to be safely parsed from untrusted sources:
//! - All size fields are validated against MAX_* constants
//! - Bounds checking prevents buffer overreads
//! - CRC32 footer detects corruption/truncation
//! - Varint decoder has maximum iteration limits
//! - The decoded index is rebuilt and revalidated, so bytes that pass the
//!   CRC but do not describe a real index still never produce one
//!
//! # Format Overview (v1)
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (36 bytes)                                          │
//! │   magic: [u8; 4] = "BWTX"                                  │
//! │   version: u8 = 1                                          │
//! │   flags: u8 (must be 0)                                    │
//! │   reserved: [u8; 2]                                        │
//! │   text_len: u64, sentinel_row: u64                         │
//! │   checkpoint_interval: u32, sa_len: u64                    │
//! ├────────────────────────────────────────────────────────────┤
//! │ 1. BWT (text_len + 1 bytes, 0 in the sentinel row)         │
//! ├────────────────────────────────────────────────────────────┤
//! │ 2. SUFFIX_ARRAY (text_len + 1 varints, sa_len bytes)       │
//! ├────────────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 + magic "XTWB"                     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Decode pipeline
//!
//! ```text
//! bytes ─▶ size/footer/CRC ─▶ header limits ─▶ BWT ─▶ invert ─▶ text
//!                                                                 │
//!            stored BWT == rebuilt BWT ◀── from_suffix_array ◀────┘
//! ```

mod encoding;
mod header;

pub use encoding::{decode_suffix_array, decode_varint, encode_suffix_array, encode_varint};
pub use header::{
    FormatFlags, IndexFooter, IndexHeader, SectionOffsets, FOOTER_MAGIC, MAGIC,
    MAX_CHECKPOINT_INTERVAL, MAX_FILE_SIZE, MAX_TEXT_LEN, MAX_VARINT_BYTES, VERSION,
};

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::index::{invert_bwt, Alphabet, Bwt, CTable, FmIndex, RankIndex};
use crate::types::IndexConfig;
use crate::verify::IndexError;

impl FmIndex {
    /// Serialize to the binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IndexError> {
        let mut sa_bytes = Vec::with_capacity(self.rows() * 3);
        encode_suffix_array(self.suffix_array(), &mut sa_bytes);

        let checkpoint_interval = u32::try_from(self.config().checkpoint_interval)
            .ok()
            .filter(|&interval| interval <= MAX_CHECKPOINT_INTERVAL)
            .ok_or_else(|| IndexError::InvalidConfig {
                reason: format!(
                    "checkpoint interval {} exceeds the persistable maximum {}",
                    self.config().checkpoint_interval,
                    MAX_CHECKPOINT_INTERVAL
                ),
            })?;

        let header = IndexHeader {
            version: VERSION,
            flags: FormatFlags::new(),
            text_len: self.text_len() as u64,
            sentinel_row: self.bwt().sentinel_row() as u64,
            checkpoint_interval,
            sa_len: sa_bytes.len() as u64,
        };

        let total_size = header.section_offsets().total_size();
        let mut buf = Vec::with_capacity(total_size);
        header.write(&mut buf)?;
        buf.extend_from_slice(self.bwt().as_bytes()); // 1. BWT
        buf.extend_from_slice(&sa_bytes); // 2. SUFFIX_ARRAY

        let crc32 = IndexFooter::compute_crc32(&buf);
        IndexFooter { crc32 }.write(&mut buf)?;

        debug_assert_eq!(buf.len(), total_size);
        Ok(buf)
    }

    /// Deserialize from bytes (with CRC32 validation)
    ///
    /// # Validation
    ///
    /// 1. File size is within limits (MAX_FILE_SIZE)
    /// 2. Footer magic and CRC32 match
    /// 3. Header magic is valid ("BWTX"), version is supported, no unknown flags
    /// 4. Lengths fit the file exactly, limits hold
    /// 5. The BWT inverts to a text, the suffix array is valid for that text,
    ///    and rebuilding from both reproduces the stored BWT
    ///
    /// Any failure is `IndexError::Corrupt` (or `Io` for truncation inside a
    /// fixed-size structure).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexError> {
        let started = Instant::now();

        if bytes.len() > MAX_FILE_SIZE {
            return Err(IndexError::corrupt(format!(
                "file too large: {} bytes (max {})",
                bytes.len(),
                MAX_FILE_SIZE
            )));
        }

        let min_size = IndexHeader::SIZE + IndexFooter::SIZE;
        if bytes.len() < min_size {
            return Err(IndexError::corrupt(format!(
                "file too small: {} bytes (minimum {})",
                bytes.len(),
                min_size
            )));
        }

        let footer = IndexFooter::read(bytes).map_err(|e| IndexError::corrupt(e.to_string()))?;
        let content = &bytes[..bytes.len() - IndexFooter::SIZE];
        let computed_crc32 = IndexFooter::compute_crc32(content);
        if footer.crc32 != computed_crc32 {
            return Err(IndexError::corrupt(format!(
                "CRC32 mismatch: expected {:#010x}, got {:#010x}",
                footer.crc32, computed_crc32
            )));
        }

        let header = IndexHeader::read(&mut io::Cursor::new(bytes))
            .map_err(|e| IndexError::corrupt(e.to_string()))?;
        validate_header(&header)?;

        let offsets = header.section_offsets();
        if offsets.total_size() != bytes.len() {
            return Err(IndexError::corrupt(format!(
                "section lengths describe {} bytes, file has {}",
                offsets.total_size(),
                bytes.len()
            )));
        }

        // Both conversions are bounded by the file size checked above
        let rows = header.text_len as usize + 1;
        let sentinel_row = header.sentinel_row as usize;

        let bwt_bytes = offsets
            .slice(bytes, offsets.bwt)
            .ok_or_else(|| IndexError::corrupt("BWT section out of bounds"))?;
        if bwt_bytes[sentinel_row] != 0 {
            return Err(IndexError::corrupt("sentinel row placeholder is not 0"));
        }
        let sa_bytes = offsets
            .slice(bytes, offsets.suffix_array)
            .ok_or_else(|| IndexError::corrupt("suffix array section out of bounds"))?;
        let suffix_array = decode_suffix_array(sa_bytes, rows)
            .map_err(|e| IndexError::corrupt(format!("suffix array: {}", e)))?;

        let stored = Bwt::from_parts(bwt_bytes.to_vec(), sentinel_row);
        let text = recover_text(&stored, header.checkpoint_interval as usize)?;

        let config = IndexConfig::default().with_checkpoint_interval(header.checkpoint_interval as usize);
        let index = FmIndex::from_suffix_array(&text, suffix_array, &config)
            .map_err(|e| IndexError::corrupt(e.to_string()))?;
        if index.bwt() != &stored {
            return Err(IndexError::corrupt(
                "stored BWT does not match the suffix array",
            ));
        }

        debug!(
            bytes = bytes.len(),
            text_len = index.text_len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "index decoded"
        );
        Ok(index)
    }

    /// Write the binary format to `path`, returning the number of bytes written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize, IndexError> {
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes)?;
        Ok(bytes.len())
    }

    /// Read and fully validate an index from `path`.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

fn validate_header(header: &IndexHeader) -> Result<(), IndexError> {
    if header.version != VERSION {
        return Err(IndexError::corrupt(format!(
            "unsupported version: {} (expected {})",
            header.version, VERSION
        )));
    }
    if header.flags.unknown_bits() != 0 {
        return Err(IndexError::corrupt(format!(
            "unknown format flags: {:#010b}",
            header.flags.unknown_bits()
        )));
    }
    if header.text_len > MAX_TEXT_LEN {
        return Err(IndexError::corrupt(format!(
            "text length {} exceeds maximum {}",
            header.text_len, MAX_TEXT_LEN
        )));
    }
    if header.sentinel_row > header.text_len {
        return Err(IndexError::corrupt(format!(
            "sentinel row {} outside {} rows",
            header.sentinel_row,
            header.text_len + 1
        )));
    }
    if header.checkpoint_interval == 0 || header.checkpoint_interval > MAX_CHECKPOINT_INTERVAL {
        return Err(IndexError::corrupt(format!(
            "checkpoint interval {} outside 1..={}",
            header.checkpoint_interval, MAX_CHECKPOINT_INTERVAL
        )));
    }
    Ok(())
}

/// Invert a stored BWT back to its text.
fn recover_text(bwt: &Bwt, checkpoint_interval: usize) -> Result<Vec<u8>, IndexError> {
    let mut counts = [0usize; 256];
    let mut seen = [false; 256];
    for symbol in bwt.symbols().flatten() {
        counts[symbol as usize] += 1;
        seen[symbol as usize] = true;
    }
    let c_table = CTable::from_counts(&counts);
    let rank = RankIndex::new(bwt.clone(), Alphabet::from_presence(&seen), checkpoint_interval)
        .map_err(|e| IndexError::corrupt(e.to_string()))?;
    invert_bwt(&rank, &c_table)
        .ok_or_else(|| IndexError::corrupt("BWT does not invert to a text"))
}
