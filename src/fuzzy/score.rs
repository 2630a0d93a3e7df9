// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Combined similarity score, with optional Hangul ↔ Latin bridging.
//!
//! `base_score` is the max of the three ratios and is symmetric. `score`
//! only pays for romanization when the base score falls short of the
//! threshold and exactly one side is Hangul: two Korean strings (or two Latin
//! ones) already compare fine directly.
//!
//! The bridge compares the plain romanization. A glossed rendering
//! ("geonguk university") is only scored once the gate passes: every
//! translated noun is found among the Latin side's words, and the romanized
//! proper name reaches the threshold against the words left over. Sharing
//! "University" is never enough on its own.

use tracing::trace;

use super::ratio::{partial_ratio, ratio, token_sort_ratio};
use crate::error::RomanizationError;
use crate::romanize::{contains_hangul, gloss, romanize};

/// Default similarity threshold used across suggestions and clustering.
pub const DEFAULT_THRESHOLD: u8 = 75;

/// Best of whole-string, partial, and token-sorted ratio.
pub fn base_score(a: &str, b: &str) -> u8 {
    let whole = ratio(a, b);
    if whole == 100 {
        return 100;
    }
    whole.max(partial_ratio(a, b)).max(token_sort_ratio(a, b))
}

/// Similarity of `a` and `b`, bridging Korean script to romanized Latin when
/// the direct comparison stays below `threshold`.
///
/// Romanization is best-effort: if the Korean side can't be transliterated,
/// the direct score is returned unchanged.
pub fn score(a: &str, b: &str, threshold: u8) -> u8 {
    let base = base_score(a, b);
    if base >= threshold {
        return base;
    }

    let (korean, other) = match (contains_hangul(a), contains_hangul(b)) {
        (true, false) => (a, b),
        (false, true) => (b, a),
        _ => return base,
    };

    match bridged_score(korean, &other.to_lowercase(), threshold) {
        Ok(bridged) => base.max(bridged),
        Err(e) => {
            trace!(text = korean, error = %e, "romanization failed, using direct score");
            base
        }
    }
}

/// Score the romanized Korean side against a lowercased Latin side.
fn bridged_score(korean: &str, latin: &str, threshold: u8) -> Result<u8, RomanizationError> {
    let plain = base_score(&romanize(korean)?.to_lowercase(), latin);

    let Some(glossed) = gloss(korean)? else {
        return Ok(plain);
    };
    let Some(rest) = without_nouns(latin, &glossed.nouns) else {
        return Ok(plain);
    };
    let name = glossed.name.to_lowercase();
    if name.is_empty() || rest.is_empty() || base_score(&name, &rest) < threshold {
        return Ok(plain);
    }

    Ok(plain.max(base_score(&glossed.rendering.to_lowercase(), latin)))
}

/// Words of `latin` left after removing every noun's words once, or `None`
/// if some noun word is missing.
fn without_nouns(latin: &str, nouns: &[&str]) -> Option<String> {
    let cleaned: String = latin
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let mut words: Vec<&str> = cleaned.split_whitespace().collect();

    for word in nouns.iter().flat_map(|noun| noun.split_whitespace()) {
        let at = words.iter().position(|w| *w == word)?;
        words.remove(at);
    }
    Some(words.join(" "))
}
