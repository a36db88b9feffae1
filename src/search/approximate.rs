// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Backward search with up to `k` substitutions.
//!
//! The search tree has one level per pattern position (read right to left)
//! and one edge per alphabet symbol. Following the expected symbol is free;
//! any other symbol costs one mismatch:
//!
//! ```text
//!                  [0, n+1)   k=1          pattern "ab", reading 'b' first
//!              /      |       \
//!         a (k=0)  b (k=1)  c (k=0)        'b' is the match edge
//!            |        |        |
//!          exact   a,b,c..   exact         budget spent: finish exactly
//! ```
//!
//! Three things keep this cheap:
//!
//! 1. A branch whose interval is empty is pruned before it is pushed.
//! 2. Once the budget hits zero the rest of the pattern is an exact run.
//! 3. Budgets larger than the pattern are clamped, so they never widen the tree.
//!
//! The traversal uses an explicit stack of immutable [`Frame`]s, so pattern
//! length never threatens the call stack. Children are pushed in reverse,
//! which makes results come out in ascending symbol order, depth first.
//!
//! Every emitted interval corresponds to a distinct string of the pattern's
//! length, so the intervals are pairwise disjoint.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::backward_step;
use super::exact::narrow;
use crate::index::FmIndex;
use crate::types::SearchInterval;
use crate::verify::{IndexError, MismatchBudget};

/// One pending node of the search tree.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Pattern symbols still to consume (`pattern[..remaining]`).
    remaining: usize,
    interval: SearchInterval,
    budget: MismatchBudget,
}

/// Intervals of every string within `max_mismatches` substitutions of
/// `pattern`, in deterministic depth-first order.
///
/// Fails with [`IndexError::InvalidBudget`] for a negative budget.
pub fn approximate_match(
    index: &FmIndex,
    pattern: &[u8],
    max_mismatches: i64,
) -> Result<Vec<SearchInterval>, IndexError> {
    let budget = MismatchBudget::new(max_mismatches)?.clamp_to(pattern.len());
    let mut hits = Vec::new();
    explore(index, pattern, root(index, pattern, budget), &mut hits);
    trace!(
        target: "bwtsearch::search::approximate",
        pattern_len = pattern.len(),
        budget = budget.get(),
        intervals = hits.len(),
        "approximate search finished"
    );
    Ok(hits)
}

/// Same result as [`approximate_match`], with the subtrees below the first
/// pattern position searched on the rayon pool.
///
/// The top level has at most one branch per alphabet symbol, which is plenty
/// of parallelism for byte alphabets. Branch results are concatenated in
/// symbol order, so the output matches the sequential search exactly.
#[cfg(feature = "parallel")]
pub fn approximate_match_parallel(
    index: &FmIndex,
    pattern: &[u8],
    max_mismatches: i64,
) -> Result<Vec<SearchInterval>, IndexError> {
    let budget = MismatchBudget::new(max_mismatches)?.clamp_to(pattern.len());
    let root = root(index, pattern, budget);
    if budget == MismatchBudget::EXACT {
        let mut hits = Vec::new();
        explore(index, pattern, root, &mut hits);
        return Ok(hits);
    }

    let branches = expand(index, pattern, &root);
    let per_branch: Vec<Vec<SearchInterval>> = branches
        .par_iter()
        .map(|&frame| {
            let mut hits = Vec::new();
            explore(index, pattern, frame, &mut hits);
            hits
        })
        .collect();
    let hits: Vec<SearchInterval> = per_branch.into_iter().flatten().collect();

    trace!(
        target: "bwtsearch::search::approximate",
        pattern_len = pattern.len(),
        budget = budget.get(),
        branches = branches.len(),
        intervals = hits.len(),
        "parallel approximate search finished"
    );
    Ok(hits)
}

fn root(index: &FmIndex, pattern: &[u8], budget: MismatchBudget) -> Frame {
    Frame {
        remaining: pattern.len(),
        interval: index.full_interval(),
        budget,
    }
}

/// Depth-first traversal from `start`, appending matches to `hits`.
fn explore(index: &FmIndex, pattern: &[u8], start: Frame, hits: &mut Vec<SearchInterval>) {
    let mut stack = vec![start];
    while let Some(frame) = stack.pop() {
        if frame.budget == MismatchBudget::EXACT {
            let interval = narrow(index, &pattern[..frame.remaining], frame.interval);
            if !interval.is_empty() {
                hits.push(interval);
            }
            continue;
        }
        if frame.remaining == 0 {
            hits.push(frame.interval);
            continue;
        }
        let children = expand(index, pattern, &frame);
        stack.extend(children.into_iter().rev());
    }
}

/// Non-empty children of `frame`, in ascending symbol order.
///
/// Callers only expand frames with budget left and symbols left to consume.
fn expand(index: &FmIndex, pattern: &[u8], frame: &Frame) -> Vec<Frame> {
    let remaining = frame.remaining - 1;
    let expected = pattern[remaining];
    index
        .alphabet()
        .symbols()
        .iter()
        .filter_map(|&symbol| {
            let budget = if symbol == expected {
                frame.budget
            } else {
                frame.budget.spend()?
            };
            let interval = backward_step(index, symbol, frame.interval);
            (!interval.is_empty()).then_some(Frame {
                remaining,
                interval,
                budget,
            })
        })
        .collect()
}
