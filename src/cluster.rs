// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-group clustering of near-duplicate spellings.
//!
//! Pool every `(text, group)` occurrence, group by group in insertion order,
//! then make one greedy pass: the first unassigned occurrence seeds a cluster,
//! and every later unassigned text scoring at least the threshold *against the
//! seed* joins it. Comparisons use the bridging scorer, so "건국대학교" and
//! "Konkuk University" can land together.
//!
//! # Seed-anchored, not transitive
//!
//! Membership is tested against the seed only. Two members can each be close
//! to the seed and still be far from each other, and a text close to a member
//! but not to the seed starts (or joins) a different cluster. Clusters are
//! never closed transitively.
//!
//! # Invariants
//!
//! - Every distinct text is assigned to at most one cluster.
//! - Only clusters with two or more distinct texts are emitted.
//! - A text keeps the group it was first pooled from. Later occurrences of an
//!   assigned text, the seed's own included, are skipped.
//!
//! Cost is O(n²) score calls over the pooled occurrence count. Scores of the
//! seed against the remaining texts are independent of each other, so they are
//! computed in parallel and then applied in order.

use std::collections::HashSet;

use indexmap::IndexMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::fuzzy::score;
use crate::types::{ClusterEntry, ClusterItem, Groups};

/// One pooled item and the group it came from.
#[derive(Debug, Clone, Copy)]
struct Occurrence<'a> {
    text: &'a str,
    group: &'a str,
}

fn flatten(groups: &Groups) -> Vec<Occurrence<'_>> {
    groups
        .iter()
        .flat_map(|(group, items)| {
            items.iter().map(move |text| Occurrence {
                text: text.as_str(),
                group: group.as_str(),
            })
        })
        .collect()
}

/// Cluster similar items across all groups.
pub fn find_similar_groups(groups: &Groups, threshold: u8) -> Vec<ClusterEntry> {
    let pool = flatten(groups);
    let mut processed: HashSet<&str> = HashSet::with_capacity(pool.len());
    let mut clusters = Vec::new();

    for (i, seed) in pool.iter().enumerate() {
        if processed.contains(seed.text) {
            continue;
        }
        processed.insert(seed.text);

        let mut members: IndexMap<&str, Vec<&str>> = IndexMap::new();
        members.insert(seed.text, vec![seed.group]);

        let rest = &pool[i + 1..];
        let scores = seed_scores(seed.text, rest, &processed, threshold);

        for (occurrence, similarity) in rest.iter().zip(scores) {
            if processed.contains(occurrence.text) {
                continue;
            }
            if similarity.is_some_and(|s| s >= threshold) {
                members.insert(occurrence.text, vec![occurrence.group]);
                processed.insert(occurrence.text);
            }
        }

        if members.len() >= 2 {
            clusters.push(build_entry(members));
        }
    }

    debug!(
        occurrences = pool.len(),
        clusters = clusters.len(),
        "clustered similar items"
    );
    clusters
}

/// Seed-vs-candidate scores; `None` for texts already assigned before this pass.
fn seed_scores(
    seed: &str,
    rest: &[Occurrence<'_>],
    processed: &HashSet<&str>,
    threshold: u8,
) -> Vec<Option<u8>> {
    let compute = |occurrence: &Occurrence<'_>| {
        (!processed.contains(occurrence.text)).then(|| score(seed, occurrence.text, threshold))
    };

    #[cfg(feature = "parallel")]
    let scores = rest.par_iter().map(compute).collect();
    #[cfg(not(feature = "parallel"))]
    let scores = rest.iter().map(compute).collect();

    scores
}

/// Pick the representative and rank the spellings.
fn build_entry(members: IndexMap<&str, Vec<&str>>) -> ClusterEntry {
    // Most groups wins, then the longer spelling, then the first seen
    let mut representative = "";
    let mut best = (0usize, 0usize);
    for (text, sources) in &members {
        let key = (sources.len(), text.chars().count());
        if key > best {
            best = key;
            representative = *text;
        }
    }

    let mut items_list: Vec<ClusterItem> = members
        .iter()
        .map(|(text, sources)| ClusterItem {
            text: (*text).to_string(),
            groups: sources.iter().map(|g| (*g).to_string()).collect(),
            count: sources.len(),
        })
        .collect();
    items_list.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)));

    ClusterEntry {
        representative: representative.to_string(),
        items: members
            .into_iter()
            .map(|(text, sources)| {
                (
                    text.to_string(),
                    sources.into_iter().map(str::to_string).collect(),
                )
            })
            .collect(),
        items_list,
    }
}
