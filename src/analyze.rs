// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composed entry point: groups in, full report out.
//!
//! `analyze` is a pure function of its input. Empty groups are dropped first;
//! if nothing is left the caller gets `AnalysisError::NoData` rather than an
//! empty report, so a boundary layer can ask the user for data.
//!
//! `handle_request` is the same thing one step further out: it takes the
//! request body a web form posts (`num_groups`, `group_{i}_name`,
//! `group_{i}_data`), parses each pasted list, and analyzes the result.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::cluster::find_similar_groups;
use crate::combinatorics::analyze_groups;
use crate::error::AnalysisError;
use crate::fuzzy::DEFAULT_THRESHOLD;
use crate::parse::parse_input;
use crate::types::{AnalysisResult, Groups};

/// Number of groups a request describes when it doesn't say.
pub const DEFAULT_NUM_GROUPS: usize = 2;

/// Knobs for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Minimum score for two items to share a cluster.
    pub threshold: u8,
    /// Minimum score for a coverage suggestion.
    pub suggestion_threshold: u8,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            suggestion_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AnalysisOptions {
    fn validate(&self) -> Result<(), AnalysisError> {
        for (name, value) in [
            ("threshold", self.threshold),
            ("suggestion_threshold", self.suggestion_threshold),
        ] {
            if value > 100 {
                return Err(AnalysisError::InvalidThreshold {
                    name,
                    value: value.into(),
                });
            }
        }
        Ok(())
    }
}

/// Analyze `groups`: set combinatorics plus similarity clusters.
pub fn analyze(groups: Groups, options: &AnalysisOptions) -> Result<AnalysisResult, AnalysisError> {
    options.validate()?;

    let groups: Groups = groups
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect();
    if groups.is_empty() {
        return Err(AnalysisError::NoData);
    }

    debug!(
        groups = groups.len(),
        items = groups.values().map(|items| items.len()).sum::<usize>(),
        "starting analysis"
    );

    let report = analyze_groups(&groups, options.suggestion_threshold);
    let clusters = find_similar_groups(&groups, options.threshold);
    Ok(AnalysisResult::from_parts(report, clusters))
}

/// One pasted list from a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestGroup {
    pub name: String,
    pub data: String,
}

/// A form-style analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub groups: Vec<RequestGroup>,
}

impl AnalyzeRequest {
    /// Read the flat form body: `num_groups` (default 2), then
    /// `group_{i}_name` (default `그룹 {i+1}`) and `group_{i}_data` (default
    /// empty) for each `i`.
    pub fn from_value(body: &Value) -> Result<Self, AnalysisError> {
        let fields = body
            .as_object()
            .ok_or_else(|| AnalysisError::MalformedRequest("body must be a JSON object".into()))?;

        let num_groups = match fields.get("num_groups") {
            None | Some(Value::Null) => DEFAULT_NUM_GROUPS,
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    AnalysisError::MalformedRequest(format!(
                        "num_groups must be a non-negative integer, got {}",
                        value
                    ))
                })?,
        };

        let mut groups = Vec::with_capacity(num_groups);
        for i in 0..num_groups {
            let name = string_field(fields, &format!("group_{}_name", i))?
                .unwrap_or_else(|| default_group_name(i));
            let data = string_field(fields, &format!("group_{}_data", i))?.unwrap_or_default();
            groups.push(RequestGroup { name, data });
        }

        Ok(Self { groups })
    }

    /// Parse every list. A repeated name replaces the earlier group's items.
    pub fn into_groups(self) -> Groups {
        self.groups
            .into_iter()
            .map(|group| (group.name, parse_input(&group.data)))
            .collect()
    }
}

fn string_field(
    fields: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<String>, AnalysisError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AnalysisError::MalformedRequest(format!(
            "{} must be a string, got {}",
            key, other
        ))),
    }
}

/// `그룹 1`, `그룹 2`, …
pub fn default_group_name(index: usize) -> String {
    format!("그룹 {}", index + 1)
}

/// Handle a deserialized request body end to end.
pub fn handle_request(
    body: &Value,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    let request = AnalyzeRequest::from_value(body)?;
    analyze(request.into_groups(), options)
}

/// Handle a raw JSON request body.
pub fn handle_request_str(
    body: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    let value: Value = serde_json::from_str(body)?;
    handle_request(&value, options)
}
