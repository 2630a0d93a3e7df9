// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact set relationships between any number of groups.
//!
//! Four reports, all keyed by group names and all following the groups'
//! insertion order:
//!
//! 1. **Combinations**: for every non-empty subset of groups, the items in
//!    *exactly* those groups (in all of them, in none of the others). The full
//!    subset is the plain all-way intersection. Empty combinations are omitted.
//! 2. **Intersections**: plain `A ∩ B` for every unordered pair, always emitted.
//! 3. **Unique items**: items only one group has.
//! 4. **Coverage matrix**: for every ordered pair `A→B`, how much of A appears in
//!    B, plus suggestions from B for each item A has and B doesn't.
//!
//! # Cost
//!
//! Combinations enumerate `2^G − 1` subsets for `G` groups. That's fine for the
//! handful of lists people paste side by side; it is not meant for hundreds of
//! groups. The coverage matrix is `G·(G−1)` rows, each running a suggestion
//! search per missing item, and is the part that runs in parallel.

use std::collections::BTreeSet;

use indexmap::IndexMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::suggest::find_similar;
use crate::types::{
    combination_key, coverage_key, CombinatoricsReport, CoverageEntry, Groups, ItemList,
    MissingItem,
};

/// Every `r`-element subset of `0..n`, as ascending index vectors, in
/// lexicographic order.
///
/// ```ignore
/// assert_eq!(combinations(3, 2), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
pub fn combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
    if r == 0 || r > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut indices: Vec<usize> = (0..r).collect();
    loop {
        out.push(indices.clone());

        // Rightmost index that can still move right
        let Some(pos) = (0..r).rev().find(|&i| indices[i] != i + n - r) else {
            return out;
        };
        indices[pos] += 1;
        for i in pos + 1..r {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

/// Run all four reports over `groups`.
///
/// `suggestion_threshold` is the minimum score for a coverage suggestion.
/// An empty `groups` gives an empty report.
pub fn analyze_groups(groups: &Groups, suggestion_threshold: u8) -> CombinatoricsReport {
    if groups.is_empty() {
        return CombinatoricsReport::default();
    }

    let sets: Vec<(&String, &BTreeSet<String>)> = groups.iter().collect();
    debug!(groups = sets.len(), "analyzing set combinations");

    CombinatoricsReport {
        group_names: sets.iter().map(|(name, _)| (*name).clone()).collect(),
        group_sizes: sets
            .iter()
            .map(|(name, items)| ((*name).clone(), items.len()))
            .collect(),
        combinations: exact_combinations(&sets),
        intersections: pairwise_intersections(&sets),
        unique_items: unique_items(&sets),
        coverage_matrix: coverage_matrix(&sets, suggestion_threshold),
    }
}

/// Items belonging to exactly the groups at `members`.
fn exact_membership(sets: &[(&String, &BTreeSet<String>)], members: &[usize]) -> Vec<String> {
    let Some((first, rest)) = members.split_first() else {
        return Vec::new();
    };
    let (_, seed) = sets[*first];

    seed.iter()
        .filter(|item| rest.iter().all(|&m| sets[m].1.contains(*item)))
        .filter(|item| {
            sets.iter()
                .enumerate()
                .filter(|(i, _)| !members.contains(i))
                .all(|(_, (_, other))| !other.contains(*item))
        })
        .cloned()
        .collect()
}

fn exact_combinations(sets: &[(&String, &BTreeSet<String>)]) -> IndexMap<String, ItemList> {
    let mut out = IndexMap::new();

    for r in 1..=sets.len() {
        for members in combinations(sets.len(), r) {
            let items = exact_membership(sets, &members);
            if items.is_empty() {
                continue;
            }
            let names: Vec<&str> = members.iter().map(|&m| sets[m].0.as_str()).collect();
            out.insert(combination_key(&names), ItemList::from_items(items));
        }
    }

    out
}

fn pairwise_intersections(sets: &[(&String, &BTreeSet<String>)]) -> IndexMap<String, ItemList> {
    combinations(sets.len(), 2)
        .into_iter()
        .map(|pair| {
            let (a_name, a) = sets[pair[0]];
            let (b_name, b) = sets[pair[1]];
            (
                combination_key(&[a_name, b_name]),
                ItemList::from_items(a.intersection(b).cloned()),
            )
        })
        .collect()
}

fn unique_items(sets: &[(&String, &BTreeSet<String>)]) -> IndexMap<String, ItemList> {
    (0..sets.len())
        .map(|i| {
            let (name, _) = sets[i];
            (name.clone(), ItemList::from_items(exact_membership(sets, &[i])))
        })
        .collect()
}

/// Coverage of `source` by `target`.
fn coverage(
    source: &BTreeSet<String>,
    target: &BTreeSet<String>,
    suggestion_threshold: u8,
) -> CoverageEntry {
    let covered = source.intersection(target).count();
    let total = source.len();
    let percentage = coverage_percentage(covered, total);

    // BTreeSet difference iterates in sorted order
    let missing = source
        .difference(target)
        .map(|item| MissingItem {
            item: item.clone(),
            suggestions: find_similar(item, target, suggestion_threshold),
        })
        .collect();

    CoverageEntry {
        covered,
        total,
        percentage,
        missing,
    }
}

fn coverage_matrix(
    sets: &[(&String, &BTreeSet<String>)],
    suggestion_threshold: u8,
) -> IndexMap<String, CoverageEntry> {
    let pairs: Vec<(usize, usize)> = (0..sets.len())
        .flat_map(|a| (0..sets.len()).filter(move |&b| b != a).map(move |b| (a, b)))
        .collect();

    let compute = |&(a, b): &(usize, usize)| {
        let (a_name, a_items) = sets[a];
        let (b_name, b_items) = sets[b];
        (
            coverage_key(a_name, b_name),
            coverage(a_items, b_items, suggestion_threshold),
        )
    };

    // Both paths collect in pair order
    #[cfg(feature = "parallel")]
    let rows: Vec<(String, CoverageEntry)> = pairs.par_iter().map(compute).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<(String, CoverageEntry)> = pairs.iter().map(compute).collect();

    rows.into_iter().collect()
}

/// Percentage rounded to two decimals. Only full coverage reads 100 and only
/// none reads 0, however large the set.
fn coverage_percentage(covered: usize, total: usize) -> f64 {
    if total == 0 || covered == 0 {
        return 0.0;
    }
    if covered >= total {
        return 100.0;
    }
    round2(covered as f64 / total as f64 * 100.0).clamp(0.01, 99.99)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
