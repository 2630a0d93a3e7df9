// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy scoring: how alike are two pasted items?
//!
//! Three ratios live in `ratio`: whole-string, best-aligned window, and
//! token-order-insensitive. `score` takes the best of them and, when one side
//! is Hangul and the other isn't, retries against the romanized spelling.

mod ratio;
mod score;

pub use ratio::*;
pub use score::*;
