// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the similarity scorer.
//!
//! Covers the ratios and the romanization bridge with arbitrary Unicode,
//! including stray jamo and conjoining sequences that must fall back rather
//! than panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use setsift::fuzzy::{partial_ratio, ratio, token_sort_ratio};
use setsift::romanize::romanize;
use setsift::{base_score, score};

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    a: String,
    b: String,
    threshold: u8,
}

fuzz_target!(|input: ScoreInput| {
    // Cap lengths to avoid timeouts (LCS is quadratic)
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let threshold = input.threshold.min(100);

    let direct = base_score(&a, &b);
    let bridged = score(&a, &b, threshold);

    // INVARIANT 1: everything is a percentage
    for value in [
        ratio(&a, &b),
        partial_ratio(&a, &b),
        token_sort_ratio(&a, &b),
        direct,
        bridged,
    ] {
        assert!(value <= 100, "score {} out of range for {:?} / {:?}", value, a, b);
    }

    // INVARIANT 2: the direct score is symmetric
    assert_eq!(direct, base_score(&b, &a));

    // INVARIANT 3: bridging never lowers the score
    assert!(bridged >= direct);

    // INVARIANT 4: identity
    assert_eq!(base_score(&a, &a), 100);

    // Romanization either succeeds or reports a jamo; it never panics
    let _ = romanize(&a);
});
