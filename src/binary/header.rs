// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format header and footer structures.
//!
//! The header is 36 bytes of fixed-size fields, parsed in one read before
//! anything else. It carries every length needed to find the two sections,
//! so section boundaries are known before a single section byte is decoded.
//!
//! The footer is 8 bytes: a CRC32 checksum over everything before it, plus a
//! magic number ("XTWB", the header magic reversed). If the footer is wrong,
//! something got corrupted or truncated. Don't trust the data.
//!
//! `SectionOffsets` is the single source of truth for the file layout. Both
//! the encoder and the decoder compute section boundaries through it.

use std::io::{self, Read, Write};

use crc32fast::Hasher as Crc32Hasher;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes: "BWTX" in ASCII (header)
pub const MAGIC: [u8; 4] = *b"BWTX";

/// Footer magic: "XTWB" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = *b"XTWB";

/// Current format version
pub const VERSION: u8 = 1;

// ============================================================================
// SECURITY LIMITS (prevent resource exhaustion from malicious input)
// ============================================================================

/// Maximum file size: 1 GiB (prevents huge allocations)
pub const MAX_FILE_SIZE: usize = 1 << 30;

/// Maximum indexed text length. Each text byte costs at least two file bytes
/// (one BWT byte, one varint byte), so this never binds before `MAX_FILE_SIZE`.
pub const MAX_TEXT_LEN: u64 = (MAX_FILE_SIZE / 2) as u64;

/// Maximum checkpoint interval accepted from a file
pub const MAX_CHECKPOINT_INTERVAL: u32 = 1 << 20;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

// ============================================================================
// FLAGS
// ============================================================================

/// Format flags. Version 1 defines none; any set bit is rejected so a newer
/// writer's file cannot be silently misread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags(pub(crate) u8);

impl FormatFlags {
    pub const KNOWN: u8 = 0;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn unknown_bits(self) -> u8 {
        self.0 & !Self::KNOWN
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// Binary format header (36 bytes fixed size)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHeader {
    pub version: u8,
    pub flags: FormatFlags,
    /// Text length; the BWT section holds `text_len + 1` bytes
    pub text_len: u64,
    /// Row of the BWT holding the sentinel
    pub sentinel_row: u64,
    pub checkpoint_interval: u32,
    /// Byte length of the varint-encoded suffix array section
    pub sa_len: u64,
}

impl IndexHeader {
    // 4 (magic) + 1 (version) + 1 (flags) + 2 (reserved) + 8 + 8 + 4 + 8 = 36
    pub const SIZE: usize = 36;

    pub fn section_offsets(&self) -> SectionOffsets {
        SectionOffsets::from_header(self)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version])?;
        w.write_all(&[self.flags.0])?;
        w.write_all(&[0u8; 2])?; // reserved (2 bytes for alignment)
        w.write_all(&self.text_len.to_le_bytes())?;
        w.write_all(&self.sentinel_row.to_le_bytes())?;
        w.write_all(&self.checkpoint_interval.to_le_bytes())?;
        w.write_all(&self.sa_len.to_le_bytes())?;
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid magic: expected BWTX, got {:?}", magic),
            ));
        }

        let mut buf = [0u8; 32]; // 36 - 4 (magic) = 32
        r.read_exact(&mut buf)?;

        let u64_at = |at: usize| {
            let mut word = [0u8; 8];
            word.copy_from_slice(&buf[at..at + 8]);
            u64::from_le_bytes(word)
        };

        Ok(Self {
            version: buf[0],
            flags: FormatFlags(buf[1]),
            // buf[2..4] is reserved
            text_len: u64_at(4),
            sentinel_row: u64_at(12),
            checkpoint_interval: u32::from_le_bytes([buf[20], buf[21], buf[22], buf[23]]),
            sa_len: u64_at(24),
        })
    }
}

// ============================================================================
// FOOTER (8 bytes)
// ============================================================================

/// Footer with CRC32 checksum and magic number
#[derive(Debug, Clone)]
pub struct IndexFooter {
    /// CRC32 checksum of header + all sections (everything before footer)
    pub crc32: u32,
}

impl IndexFooter {
    pub const SIZE: usize = 8; // 4 bytes CRC32 + 4 bytes magic

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)?;
        Ok(())
    }

    pub fn read(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "File too short for footer",
            ));
        }

        let footer_start = bytes.len() - Self::SIZE;

        let magic = &bytes[footer_start + 4..];
        if magic != FOOTER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid footer magic: expected XTWB, got {:?}", magic),
            ));
        }

        let crc32 = u32::from_le_bytes([
            bytes[footer_start],
            bytes[footer_start + 1],
            bytes[footer_start + 2],
            bytes[footer_start + 3],
        ]);

        Ok(Self { crc32 })
    }

    /// Compute CRC32 over the given bytes
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}

// ============================================================================
// SECTION OFFSETS
// ============================================================================

/// Section byte offsets.
///
/// Layout order:
/// 1. HEADER        [36B]
/// 2. BWT           [text_len + 1]  - one byte per row
/// 3. SUFFIX_ARRAY  [sa_len]        - LEB128 varints
/// 4. FOOTER        [8B]            - CRC32 validation
///
/// Offsets are computed with checked arithmetic: header lengths come from
/// untrusted input and must not overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOffsets {
    pub bwt: (usize, usize),
    pub suffix_array: (usize, usize),
    pub footer: (usize, usize),
}

impl SectionOffsets {
    pub fn from_header(h: &IndexHeader) -> Self {
        let add = |pos: usize, len: u64| {
            usize::try_from(len)
                .ok()
                .and_then(|len| pos.checked_add(len))
                .unwrap_or(usize::MAX)
        };
        let mut pos = IndexHeader::SIZE;

        let bwt_start = pos;
        pos = add(pos, h.text_len.saturating_add(1));
        let bwt_end = pos;

        let sa_start = pos;
        pos = add(pos, h.sa_len);
        let sa_end = pos;

        let footer_start = pos;
        let footer_end = pos.saturating_add(IndexFooter::SIZE);

        Self {
            bwt: (bwt_start, bwt_end),
            suffix_array: (sa_start, sa_end),
            footer: (footer_start, footer_end),
        }
    }

    /// Expected content size (everything before footer)
    pub fn content_size(&self) -> usize {
        self.footer.0
    }

    /// Total file size including footer
    pub fn total_size(&self) -> usize {
        self.footer.1
    }

    /// Get a slice for a section from the bytes
    #[inline]
    pub fn slice<'a>(&self, bytes: &'a [u8], section: (usize, usize)) -> Option<&'a [u8]> {
        bytes.get(section.0..section.1)
    }
}
