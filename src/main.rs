// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;

use bwtsearch::binary::{IndexHeader, MAGIC};
use bwtsearch::{
    FmIndex, IndexConfig, NaiveSuffixArray, SaisSuffixArray, SuffixArraySupplier,
    SENTINEL_DISPLAY,
};

mod cli;
use cli::display::{
    escape_bytes, format_size, hit_snippet, pad_right, row, section_bot, section_top, themed,
    timing_us, title, BOLD, CYAN, GRAY, GREEN, YELLOW,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            naive,
            checkpoint,
        } => run_build(&input, &output, naive, checkpoint),
        Commands::Search {
            file,
            pattern,
            mismatches,
            json,
            count,
            limit,
            context,
        } => run_search(&file, &pattern.0, mismatches, json, count, limit, context),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_build(input: &str, output: &str, naive: bool, checkpoint: usize) -> Result<()> {
    let text = fs::read(input).with_context(|| format!("failed to read {}", input))?;
    let config = IndexConfig::default().with_checkpoint_interval(checkpoint);
    let supplier: &dyn SuffixArraySupplier = if naive {
        &NaiveSuffixArray
    } else {
        &SaisSuffixArray
    };

    let started = Instant::now();
    let index = FmIndex::build_with(&text, &config, supplier)
        .with_context(|| format!("failed to index {}", input))?;
    let build_us = started.elapsed().as_secs_f64() * 1e6;

    let written = index
        .write_to(output)
        .with_context(|| format!("failed to write {}", output))?;
    info!(input, output, bytes = written, "index written");

    title("bwtsearch build");
    section_top("Index");
    row(&format!(" {} {}", pad_right("input", 14), input));
    row(&format!(" {} {}", pad_right("output", 14), output));
    row(&format!(" {} {}", pad_right("text", 14), format_size(index.text_len())));
    row(&format!(" {} {}", pad_right("alphabet", 14), index.alphabet().len()));
    row(&format!(" {} {}", pad_right("suffix sort", 14), supplier.name()));
    row(&format!(" {} {}", pad_right("index file", 14), format_size(written)));
    row(&format!(" {} {}", pad_right("build time", 14), timing_us(build_us)));
    section_bot();
    println!("{}", themed(GREEN, &[BOLD], &format!(" ✓ wrote {}", output)));
    Ok(())
}

/// Load an index file, or index a plain text file in memory.
///
/// Returns the index and its text (reconstructed for index files).
fn load(file: &str) -> Result<(FmIndex, Vec<u8>)> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file))?;
    if bytes.starts_with(&MAGIC) {
        let index = FmIndex::from_bytes(&bytes)
            .with_context(|| format!("{} is not a valid index", file))?;
        let text = index.reconstruct_text();
        Ok((index, text))
    } else {
        info!(file, bytes = bytes.len(), "indexing plain text file");
        let index = FmIndex::build(&bytes).with_context(|| format!("failed to index {}", file))?;
        Ok((index, bytes))
    }
}

fn run_search(
    file: &str,
    needle: &[u8],
    mismatches: i64,
    json: bool,
    count_only: bool,
    limit: usize,
    context: usize,
) -> Result<()> {
    let (index, text) = load(file)?;

    if count_only {
        let hits = index
            .search(needle, mismatches)
            .with_context(|| format!("search for \"{}\" failed", escape_bytes(needle)))?;
        println!("{}", hits.len());
        return Ok(());
    }

    if json {
        return print_json(&index, needle, mismatches);
    }

    let started = Instant::now();
    let positions = index
        .search(needle, mismatches)
        .with_context(|| format!("search for \"{}\" failed", escape_bytes(needle)))?;
    let elapsed_us = started.elapsed().as_secs_f64() * 1e6;

    section_top(&format!(
        "{} hits for \"{}\" (k = {})",
        positions.len(),
        escape_bytes(needle),
        mismatches
    ));
    for &offset in positions.iter().take(limit) {
        let label = themed(YELLOW, &[], &offset.to_string());
        row(&format!(
            " {} {}",
            pad_right(&label, 10),
            hit_snippet(&text, offset, needle, context)
        ));
    }
    if positions.len() > limit {
        row(&themed(
            GRAY,
            &[],
            &format!(" ... and {} more", positions.len() - limit),
        ));
    }
    section_bot();
    println!(" search time: {}", timing_us(elapsed_us));
    Ok(())
}

#[cfg(feature = "serde_json")]
fn print_json(index: &FmIndex, pattern: &[u8], mismatches: i64) -> Result<()> {
    use bwtsearch::SearchInterval;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SearchReport {
        pattern: String,
        max_mismatches: i64,
        text_len: usize,
        intervals: Vec<SearchInterval>,
        positions: Vec<usize>,
        elapsed_us: u64,
    }

    let started = Instant::now();
    let intervals = index.approximate_match(pattern, mismatches)?;
    let positions = index.resolve(&intervals)?;
    let report = SearchReport {
        pattern: escape_bytes(pattern),
        max_mismatches: mismatches,
        text_len: index.text_len(),
        intervals,
        positions,
        elapsed_us: started.elapsed().as_micros() as u64,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn print_json(_index: &FmIndex, _pattern: &[u8], _mismatches: i64) -> Result<()> {
    anyhow::bail!("JSON output needs the `serde_json` feature")
}

fn run_inspect(file: &str) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file))?;
    let header = IndexHeader::read(&mut io::Cursor::new(&bytes))
        .with_context(|| format!("{} has no valid header", file))?;
    let index =
        FmIndex::from_bytes(&bytes).with_context(|| format!("{} is not a valid index", file))?;

    title("bwtsearch inspect");

    section_top("File");
    row(&format!(" {} {}", pad_right("path", 20), file));
    row(&format!(" {} {}", pad_right("size", 20), format_size(bytes.len())));
    row(&format!(" {} v{}", pad_right("format", 20), header.version));
    row(&format!(
        " {} {}",
        pad_right("BWT section", 20),
        format_size(index.rows())
    ));
    row(&format!(
        " {} {} ({:.2} B/entry)",
        pad_right("suffix array", 20),
        format_size(header.sa_len as usize),
        header.sa_len as f64 / index.rows() as f64
    ));
    section_bot();

    let rank = index.rank_index();
    section_top("Index");
    row(&format!(" {} {}", pad_right("text length", 20), index.text_len()));
    row(&format!(" {} {}", pad_right("sentinel row", 20), index.bwt().sentinel_row()));
    row(&format!(
        " {} every {} rows, {} stored, {}",
        pad_right("checkpoints", 20),
        rank.checkpoint_interval(),
        rank.checkpoint_count(),
        format_size(rank.checkpoint_bytes())
    ));
    let preview: String = index
        .bwt()
        .symbols()
        .take(48)
        .map(|symbol| symbol.map_or(SENTINEL_DISPLAY.to_string(), |s| escape_bytes(&[s])))
        .collect();
    row(&format!(" {} {}", pad_right("BWT preview", 20), preview));
    section_bot();

    section_top(&format!("Alphabet ({} symbols)", index.alphabet().len()));
    row(&themed(
        CYAN,
        &[BOLD],
        &format!(" {} {} {}", pad_right("symbol", 10), pad_right("C[s]", 14), "count"),
    ));
    for &symbol in index.alphabet().symbols() {
        row(&format!(
            " {} {} {}",
            pad_right(&escape_bytes(&[symbol]), 10),
            pad_right(&index.c_table().get(symbol).to_string(), 14),
            index.c_table().occurrences(symbol)
        ));
    }
    section_bot();
    Ok(())
}
