// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three similarity ratios behind every fuzzy score.
//!
//! All three return an integer percentage in `0..=100` and work on Unicode
//! scalar values, not bytes, so a Hangul syllable counts as one character.
//!
//! - `ratio`: indel similarity, `2·LCS / (|a| + |b|)`. Substitutions cost two
//!   edits (delete + insert), which is what makes "Apple" vs "Apple Inc" score
//!   as a near match rather than a coin flip.
//! - `partial_ratio`: slide the shorter string over the longer one and keep the
//!   best window. Rewards sub-phrases.
//! - `token_sort_ratio`: lowercase, strip punctuation, sort the words, then
//!   `ratio`. Rewards reordered words.

/// Indel similarity of two strings, as a rounded percentage.
///
/// Both empty → 100 (identical). Exactly one empty → 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best `ratio` of the shorter string against every equal-length window of
/// the longer one.
///
/// Equal lengths degenerate to a single window, i.e. plain `ratio`.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return if long.is_empty() { 100 } else { 0 };
    }

    let mut best = 0;
    for window in long.windows(short.len()) {
        best = best.max(ratio_chars(short, window));
        if best == 100 {
            break;
        }
    }
    best
}

/// `ratio` after lowercasing, replacing non-alphanumerics with spaces, and
/// sorting whitespace-delimited tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Lowercase, turn every non-alphanumeric character into a separator, and
/// re-join the sorted tokens with single spaces.
pub fn sorted_tokens(value: &str) -> String {
    let processed: String = value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();

    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let common = lcs_len(a, b);
    (200.0 * common as f64 / total as f64).round() as u8
}

/// Longest common subsequence length, single rolling row.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Keep the row as short as possible
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut dp = vec![0usize; inner.len() + 1];
    for &oc in outer {
        let mut diag = 0;
        for (j, &ic) in inner.iter().enumerate() {
            let above = dp[j + 1];
            dp[j + 1] = if oc == ic {
                diag + 1
            } else {
                above.max(dp[j])
            };
            diag = above;
        }
    }
    dp[inner.len()]
}
