// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LEB128 varints and the suffix array section built from them.
//!
//! Decoding garbage must return Err rather than panic, and anything that
//! decodes must survive a re-encode.

#![no_main]

use bwtsearch::binary::{decode_suffix_array, decode_varint, encode_suffix_array, encode_varint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = decode_varint(data) {
        assert!((1..=10).contains(&consumed));
        assert!(consumed <= data.len());

        let mut reencoded = Vec::new();
        encode_varint(value, &mut reencoded);
        let (redecoded, reconsumed) =
            decode_varint(&reencoded).expect("re-encoded varint must decode");
        assert_eq!(value, redecoded);
        assert_eq!(reconsumed, reencoded.len());
        // Canonical form is never longer than what was parsed
        assert!(reencoded.len() <= consumed);
    }

    // Treat the first byte as an entry count for the section decoder
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    if let Ok(entries) = decode_suffix_array(rest, count as usize) {
        assert_eq!(entries.len(), count as usize);
        let mut buf = Vec::new();
        encode_suffix_array(&entries, &mut buf);
        assert_eq!(
            decode_suffix_array(&buf, entries.len()).expect("re-encoded section"),
            entries
        );
    }
});
