// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bwtsearch command-line interface.
//!
//! Three subcommands: `build` to index a text file, `search` to query an
//! index (or a raw text, indexed on the fly), and `inspect` to examine an
//! index file.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bwtsearch",
    about = "Exact and bounded-mismatch substring search over a Burrows-Wheeler index",
    version
)]
pub struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an index from a text file
    Build {
        /// Text file to index (read as raw bytes)
        #[arg(short, long)]
        input: String,

        /// Output path for the index file
        #[arg(short, long)]
        output: String,

        /// Use the naive suffix sort instead of SA-IS (slow, for cross-checking)
        #[arg(long)]
        naive: bool,

        /// Rows between rank checkpoints
        #[arg(long, default_value_t = bwtsearch::DEFAULT_CHECKPOINT_INTERVAL)]
        checkpoint: usize,
    },

    /// Search an index file, or a plain text file indexed on the fly
    Search {
        /// Index file (BWTX) or text file
        file: String,

        /// Pattern to search for; `\xNN` writes any byte, `\\` a backslash
        #[arg(value_parser = parse_pattern)]
        pattern: Pattern,

        /// Maximum number of substitutions
        #[arg(short = 'k', long, default_value = "0", allow_hyphen_values = true)]
        mismatches: i64,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,

        /// Print only the number of hits
        #[arg(long)]
        count: bool,

        /// Maximum number of hits to display
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Bytes of surrounding text shown around each hit
        #[arg(long, default_value = "16")]
        context: usize,
    },

    /// Inspect an index file
    Inspect {
        /// Path to index file
        file: String,
    },
}

/// A search pattern as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(pub Vec<u8>);

/// Decode `\xNN`, `\n`, `\t`, `\0` and `\\` escapes so byte patterns that are
/// not valid UTF-8 can be typed on a command line. Everything else is taken
/// as UTF-8 bytes.
pub fn parse_pattern(raw: &str) -> Result<Pattern, String> {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut rest = raw.as_bytes().iter().copied();
    while let Some(byte) = rest.next() {
        if byte != b'\\' {
            bytes.push(byte);
            continue;
        }
        let decoded = match rest.next() {
            Some(b'\\') => b'\\',
            Some(b'n') => b'\n',
            Some(b't') => b'\t',
            Some(b'0') => 0,
            Some(b'x') => {
                let hex: Vec<u8> = rest.by_ref().take(2).collect();
                std::str::from_utf8(&hex)
                    .ok()
                    .filter(|digits| digits.len() == 2)
                    .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                    .ok_or_else(|| format!("\\x needs two hex digits in {:?}", raw))?
            }
            Some(other) => {
                return Err(format!("unknown escape \\{} in {:?}", other as char, raw))
            }
            None => return Err(format!("trailing backslash in {:?}", raw)),
        };
        bytes.push(decoded);
    }
    Ok(Pattern(bytes))
}
