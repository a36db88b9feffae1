// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary encoding primitives: varints and the suffix array stream.
//!
//! Suffix array entries are text offsets, so most of them need far fewer
//! than eight bytes. LEB128 stores each in `ceil(bits / 7)` bytes: a 1 MB
//! text costs three bytes per entry instead of eight.
//!
//! # References
//!
//! - **Varint (LEB128)**: Little-endian base-128 variable-length integer encoding.
//!   Originally from DWARF debugging format (1992+), popularized by Protocol Buffers.
//!   See: DWARF4 specification §7.6 "Variable Length Data", and
//!   Google Protocol Buffers encoding: <https://protobuf.dev/programming-guides/encoding/>

use std::io;

use super::header::MAX_VARINT_BYTES;

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a varint to bytes
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        } else {
            buf.push(byte | 0x80);
        }
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed)
///
/// Returns an error if:
/// - Buffer is empty
/// - Varint exceeds MAX_VARINT_BYTES (malformed/malicious input)
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, usize)> {
    if bytes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty buffer for varint",
        ));
    }

    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        // The tenth byte may only contribute the top bit of a u64
        if shift == 63 && byte & 0x7E != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Varint overflows u64 (possible corruption)",
            ));
        }
        result |= ((byte & 0x7F) as u64) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
        shift += 7;
    }

    // If we get here, either buffer ended mid-varint or varint is too long
    if i >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

// ============================================================================
// SUFFIX ARRAY ENCODING
// ============================================================================

/// Encode suffix array entries as consecutive varints.
///
/// No count prefix: the header carries the text length, which fixes the
/// entry count at `text_len + 1`.
pub fn encode_suffix_array(entries: &[usize], buf: &mut Vec<u8>) {
    for &entry in entries {
        encode_varint(entry as u64, buf);
    }
}

/// Decode exactly `count` varint entries that must fill `bytes` completely.
pub fn decode_suffix_array(bytes: &[u8], count: usize) -> io::Result<Vec<usize>> {
    // Every entry takes at least one byte
    if count > bytes.len() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "Suffix array section too short: {} entries in {} bytes",
                count,
                bytes.len()
            ),
        ));
    }

    let mut entries = Vec::with_capacity(count);
    let mut pos = 0;
    for i in 0..count {
        let tail = bytes.get(pos..).unwrap_or_default();
        if tail.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("Truncated suffix array at entry {}", i),
            ));
        }
        let (entry, consumed) = decode_varint(tail)?;
        let entry = usize::try_from(entry).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Suffix array entry {} does not fit in usize", i),
            )
        })?;
        entries.push(entry);
        pos += consumed;
    }

    if pos != bytes.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Suffix array section has {} trailing bytes",
                bytes.len() - pos
            ),
        ));
    }
    Ok(entries)
}
