//! Custom cargo commands for bwtsearch.
//!
//! Usage:
//!   cargo xtask check     - cargo check, tests and clippy
//!   cargo xtask test      - Run all tests, with and without default features
//!   cargo xtask fuzz      - Short smoke run of every fuzz target
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["index_decoding", "approximate_search", "varint_codec"];

/// Seconds each target runs during `cargo xtask fuzz`.
const FUZZ_SMOKE_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("fuzz") => fuzz()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check     cargo check + test + clippy
  test      Run all tests (default features and --no-default-features)
  fuzz      Run each fuzz target for {}s (needs cargo-fuzz and nightly)
  bench     Run benchmarks
"#,
        FUZZ_SMOKE_SECONDS
    );
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// The sequential search path is only compiled without `parallel`, so both
/// feature sets are tested.
fn test() -> Result<()> {
    println!("[1/2] default features...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] --no-default-features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;

    println!("\n✓ All tests passed");
    Ok(())
}

fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={}", FUZZ_SMOKE_SECONDS);
    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    println!("\n✓ No fuzz target crashed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
