// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: error types, validated wrappers and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validated types** (`MismatchBudget`, the checks behind `IndexError`)
//!    that reject bad input at the boundary, once.
//!
//! 2. **Runtime contracts** that panic in debug builds when an internal
//!    invariant of the BWT, C table or rank checkpoints is violated.
//!    Zero-cost in release, but catch bugs when tests run.

mod types;
pub mod contracts;

pub use types::*;
