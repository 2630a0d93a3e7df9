// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compare named lists of pasted items: exact overlaps plus fuzzy,
//! cross-script near-duplicates.
//!
//! Give it a few lists (one per group) and it tells you which items every
//! group shares, which only one group has, how much of each group another
//! group covers, and which spellings across all groups probably mean the same
//! thing, including a Korean spelling and its romanized Latin one.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  romanize.rs │────▶│   fuzzy/     │────▶│   suggest.rs     │
//! │ (Hangul →    │     │ (ratio,      │     │ (top-3 "did you  │
//! │  Latin)      │     │  score)      │     │  mean")          │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!                             │                      │
//!                             ▼                      ▼
//!                      ┌──────────────┐     ┌──────────────────┐
//!                      │  cluster.rs  │     │ combinatorics.rs │
//!                      │ (seed-       │     │ (subsets, pairs, │
//!                      │  anchored)   │     │  coverage)       │
//!                      └──────────────┘     └──────────────────┘
//!                             │                      │
//!                             └──────────┬───────────┘
//!                                        ▼
//!                               ┌──────────────────┐
//!                               │   analyze.rs     │
//!                               │ (analyze,        │
//!                               │  handle_request) │
//!                               └──────────────────┘
//! ```
//!
//! Each call is a stateless, synchronous batch computation. There is no
//! shared mutable state, so concurrent callers need no locking.
//!
//! # Usage
//!
//! ```ignore
//! use setsift::{analyze, parse_input, AnalysisOptions, Groups};
//!
//! let mut groups = Groups::new();
//! groups.insert("A".into(), parse_input("건국대학교\nYonsei University"));
//! groups.insert("B".into(), parse_input("Konkuk University"));
//!
//! let result = analyze(groups, &AnalysisOptions::default())?;
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! ```

// Module declarations
mod analyze;
mod cluster;
mod combinatorics;
mod error;
pub mod fuzzy;
mod parse;
pub mod romanize;
mod suggest;
mod types;

// Re-exports for public API
pub use analyze::{
    analyze, default_group_name, handle_request, handle_request_str, AnalysisOptions,
    AnalyzeRequest, RequestGroup, DEFAULT_NUM_GROUPS,
};
pub use cluster::find_similar_groups;
pub use combinatorics::{analyze_groups, combinations};
pub use error::{AnalysisError, RomanizationError};
pub use fuzzy::{base_score, score, DEFAULT_THRESHOLD};
pub use parse::parse_input;
pub use romanize::romanize;
pub use suggest::{find_similar, MAX_SUGGESTIONS};
pub use types::{
    combination_key, coverage_key, AnalysisResult, ClusterEntry, ClusterItem,
    CombinatoricsReport, CoverageEntry, ErrorResponse, Groups, ItemList, MissingItem,
    Suggestion, COMBINATION_SEPARATOR, COVERAGE_ARROW,
};
