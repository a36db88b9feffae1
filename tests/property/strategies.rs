//! Shared proptest strategies.
//!
//! Small alphabets make repeats (and therefore interesting SA orderings and
//! multi-row intervals) likely even for short texts.

use proptest::prelude::*;

/// Byte texts over a 2- to 4-symbol alphabet.
pub fn small_alphabet_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![&b"ab"[..], b"abc", b"ACGT", b"\x00\x01\xff"])
        .prop_flat_map(move |alphabet| {
            prop::collection::vec(prop::sample::select(alphabet.to_vec()), 0..=max_len)
        })
}

/// Arbitrary byte texts, NUL and 0xFF included.
pub fn any_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// A text plus a pattern that is a substring of it (or empty).
pub fn text_with_substring(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    small_alphabet_text(max_len)
        .prop_flat_map(|text| {
            let len = text.len();
            (Just(text), 0..=len, 0..=len)
        })
        .prop_map(|(text, a, b)| {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let pattern = text[start..end].to_vec();
            (text, pattern)
        })
}

/// A text and an unrelated short pattern over the same small alphabet.
pub fn text_and_pattern(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    prop::sample::select(vec![&b"ab"[..], b"ACGT"]).prop_flat_map(move |alphabet| {
        let symbols = alphabet.to_vec();
        (
            prop::collection::vec(prop::sample::select(symbols.clone()), 0..=max_len),
            prop::collection::vec(prop::sample::select(symbols), 0..=6),
        )
    })
}

/// Checkpoint spacings from every-row up to larger than most generated texts.
pub fn checkpoint_interval() -> impl Strategy<Value = usize> {
    prop_oneof![Just(1usize), Just(2), Just(3), Just(64), 1usize..200]
}
