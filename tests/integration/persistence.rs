//! Writing indexes to disk and loading them back.

use super::common::{build, random_text, ABRACADABRA, DNA};
use bwtsearch::binary::{IndexHeader, MAGIC};
use bwtsearch::{FmIndex, IndexConfig, IndexError, SaisSuffixArray};
use std::fs;
use tempfile::TempDir;

#[test]
fn write_then_read_answers_the_same_queries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dna.bwtx");
    let text = random_text(10_000, b"ACGT", 99);
    let index = build(&text);

    index.write_to(&path).unwrap();
    let loaded = FmIndex::read_from(&path).unwrap();

    assert_eq!(loaded.reconstruct_text(), text);
    for start in (0..9_900).step_by(1_000) {
        let pattern = &text[start..start + 15];
        for k in 0..=2 {
            assert_eq!(loaded.search(pattern, k).unwrap(), index.search(pattern, k).unwrap());
        }
    }
}

#[test]
fn file_starts_with_magic_and_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("abra.bwtx");
    let config = IndexConfig::default().with_checkpoint_interval(4);
    let index = FmIndex::build_with(ABRACADABRA, &config, &SaisSuffixArray).unwrap();
    let written = index.write_to(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), written);
    assert_eq!(&bytes[..4], &MAGIC);
    let header = IndexHeader::read(&mut std::io::Cursor::new(&bytes)).unwrap();
    assert_eq!(header.text_len, 11);
    assert_eq!(header.sentinel_row, 3);
    assert_eq!(header.checkpoint_interval, 4);
    assert_eq!(header.section_offsets().total_size(), bytes.len());
}

#[test]
fn checkpoint_interval_survives_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dna.bwtx");
    let config = IndexConfig::default().with_checkpoint_interval(7);
    FmIndex::build_with(DNA, &config, &SaisSuffixArray)
        .unwrap()
        .write_to(&path)
        .unwrap();

    let loaded = FmIndex::read_from(&path).unwrap();
    assert_eq!(loaded.config().checkpoint_interval, 7);
    assert_eq!(loaded.rank_index().checkpoint_interval(), 7);
}

#[test]
fn corrupted_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.bwtx");
    build(DNA).write_to(&path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x40;
    fs::write(&path, &bytes).unwrap();

    match FmIndex::read_from(&path) {
        Err(IndexError::Corrupt { reason }) => assert!(reason.contains("CRC32")),
        other => panic!("expected Corrupt, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn truncated_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.bwtx");
    build(DNA).write_to(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 3]).unwrap();
    assert!(matches!(
        FmIndex::read_from(&path),
        Err(IndexError::Corrupt { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = FmIndex::read_from(dir.path().join("absent.bwtx")).unwrap_err();
    assert!(matches!(err, IndexError::Io(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn empty_text_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bwtx");
    build(b"").write_to(&path).unwrap();
    let loaded = FmIndex::read_from(&path).unwrap();
    assert_eq!(loaded.text_len(), 0);
    assert!(loaded.search(b"a", 1).unwrap().is_empty());
}
