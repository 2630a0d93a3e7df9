// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean…?" for items missing from another group.
//!
//! Uses the direct score only: suggestions come from the target group's own
//! vocabulary, so there's no script to bridge.

use crate::fuzzy::base_score;
use crate::types::Suggestion;

/// At most this many suggestions per missing item.
pub const MAX_SUGGESTIONS: usize = 3;

/// Top candidates scoring at least `threshold` against `item`, best first.
///
/// The sort is stable: equal scores keep the candidates' iteration order.
pub fn find_similar<'a, I>(item: &str, candidates: I, threshold: u8) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut suggestions: Vec<Suggestion> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = base_score(item, candidate);
            (score >= threshold).then(|| Suggestion {
                text: candidate.clone(),
                score,
            })
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
