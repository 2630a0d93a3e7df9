// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the request handler.
//!
//! Builds a form body from arbitrary fields and checks that the handler either
//! returns a well-formed result or a typed error. Group counts are capped since
//! combinations are exponential in them.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};
use setsift::{handle_request, AnalysisOptions};

#[derive(Debug, Arbitrary)]
struct RequestInput {
    groups: Vec<(Option<String>, String)>,
    threshold: u8,
}

fuzz_target!(|input: RequestInput| {
    let groups: Vec<_> = input.groups.into_iter().take(5).collect();

    let mut body = Map::new();
    body.insert("num_groups".into(), Value::from(groups.len()));
    for (i, (name, data)) in groups.iter().enumerate() {
        if let Some(name) = name {
            let name: String = name.chars().take(16).collect();
            body.insert(format!("group_{}_name", i), Value::from(name));
        }
        let data: String = data.chars().take(256).collect();
        body.insert(format!("group_{}_data", i), Value::from(data));
    }

    let options = AnalysisOptions {
        threshold: input.threshold.min(100),
        ..Default::default()
    };

    match handle_request(&Value::Object(body), &options) {
        Ok(result) => {
            // INVARIANT 1: sizes and names agree
            assert_eq!(result.group_names.len(), result.group_sizes.len());
            assert!(result.group_sizes.values().all(|&n| n > 0));

            // INVARIANT 2: coverage is bounded
            for entry in result.coverage_matrix.values() {
                assert!(entry.covered <= entry.total);
                assert!((0.0..=100.0).contains(&entry.percentage));
            }

            // INVARIANT 3: clusters have at least two spellings
            for cluster in &result.similar_groups {
                assert!(cluster.items.len() >= 2);
            }

            // The result always serializes
            serde_json::to_string(&result).expect("result must serialize");
        }
        Err(e) => {
            assert!(e.is_input_error(), "unexpected error: {}", e);
        }
    }
});
