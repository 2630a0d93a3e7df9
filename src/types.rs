// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes of an analysis: inputs, report sections, and the merged result.
//!
//! Everything serializes to plain nested JSON (maps, arrays, strings, numbers)
//! so a caller can hand the result straight to a renderer.
//!
//! # Invariants
//!
//! - **Groups**: iteration order is insertion order, and every derived report
//!   follows it. Item sets are `BTreeSet`s, so iterating one group is
//!   lexicographic and reproducible.
//! - **ItemList**: `count == items.len()` and `items` is sorted.
//! - **CoverageEntry**: `covered <= total`, `percentage` is `0.0` when
//!   `total == 0`, otherwise `covered / total * 100` rounded to 2 decimals.
//! - **ClusterEntry**: at least two distinct texts; `items_list` is sorted by
//!   descending `count`, then ascending text.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator between group names in a combination key.
pub const COMBINATION_SEPARATOR: &str = " ∩ ";

/// Separator between source and target in a coverage key.
pub const COVERAGE_ARROW: &str = "→";

/// Named item sets, in the order they were supplied.
pub type Groups = IndexMap<String, BTreeSet<String>>;

/// Build a combination key: `"A ∩ B ∩ C"`.
pub fn combination_key<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(COMBINATION_SEPARATOR)
}

/// Build a coverage key: `"A→B"`.
pub fn coverage_key(source: &str, target: &str) -> String {
    format!("{}{}{}", source, COVERAGE_ARROW, target)
}

/// A sorted list of items with its length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemList {
    pub count: usize,
    pub items: Vec<String>,
}

impl ItemList {
    /// Collect and sort.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        items.sort();
        Self {
            count: items.len(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A candidate correction for an item missing from another group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub score: u8,
}

/// An item of the source group that the target group lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingItem {
    pub item: String,
    pub suggestions: Vec<Suggestion>,
}

/// How much of one group another group covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageEntry {
    pub covered: usize,
    pub total: usize,
    pub percentage: f64,
    pub missing: Vec<MissingItem>,
}

/// One spelling inside a cluster and the groups it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterItem {
    pub text: String,
    pub groups: Vec<String>,
    pub count: usize,
}

/// A set of similar spellings pooled across groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEntry {
    /// Every distinct spelling → contributing groups, in discovery order.
    pub items: IndexMap<String, Vec<String>>,
    /// The canonical spelling.
    pub representative: String,
    /// Same data as `items`, ranked.
    pub items_list: Vec<ClusterItem>,
}

/// The exact-set half of an analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombinatoricsReport {
    pub group_names: Vec<String>,
    pub group_sizes: IndexMap<String, usize>,
    pub intersections: IndexMap<String, ItemList>,
    pub unique_items: IndexMap<String, ItemList>,
    pub combinations: IndexMap<String, ItemList>,
    pub coverage_matrix: IndexMap<String, CoverageEntry>,
}

/// Combinatorics plus similarity clusters: what `analyze` returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub group_names: Vec<String>,
    pub group_sizes: IndexMap<String, usize>,
    pub intersections: IndexMap<String, ItemList>,
    pub unique_items: IndexMap<String, ItemList>,
    pub combinations: IndexMap<String, ItemList>,
    pub coverage_matrix: IndexMap<String, CoverageEntry>,
    pub similar_groups: Vec<ClusterEntry>,
}

impl AnalysisResult {
    /// Merge the two halves of an analysis.
    pub fn from_parts(report: CombinatoricsReport, similar_groups: Vec<ClusterEntry>) -> Self {
        Self {
            group_names: report.group_names,
            group_sizes: report.group_sizes,
            intersections: report.intersections,
            unique_items: report.unique_items,
            combinations: report.combinations,
            coverage_matrix: report.coverage_matrix,
            similar_groups,
        }
    }
}

/// Error body for a boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
