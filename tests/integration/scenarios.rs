//! Whole analyses over small, hand-checked inputs.

use setsift::{analyze, parse_input, AnalysisError, AnalysisOptions, Groups};

use crate::common::{groups, item_strs, three_way, ROSTER_A, ROSTER_B};

// ============================================================================
// EXACT SET RELATIONSHIPS
// ============================================================================

#[test]
fn test_two_groups_overlap() {
    let result = analyze(
        groups(&[("A", &["x", "y"]), ("B", &["y", "z"])]),
        &AnalysisOptions::default(),
    )
    .unwrap();

    assert_eq!(result.group_names, vec!["A", "B"]);
    assert_eq!(result.group_sizes["A"], 2);

    let ab = &result.intersections["A ∩ B"];
    assert_eq!(ab.count, 1);
    assert_eq!(item_strs(ab), vec!["y"]);

    assert_eq!(item_strs(&result.unique_items["A"]), vec!["x"]);
    assert_eq!(item_strs(&result.unique_items["B"]), vec!["z"]);

    let coverage = &result.coverage_matrix["A→B"];
    assert_eq!(coverage.percentage, 50.0);
    assert_eq!(coverage.covered, 1);
    assert_eq!(coverage.total, 2);
    assert_eq!(coverage.missing.len(), 1);
    assert_eq!(coverage.missing[0].item, "x");
}

#[test]
fn test_item_in_every_group_only_under_full_key() {
    let result = analyze(three_way(), &AnalysisOptions::default()).unwrap();

    assert_eq!(item_strs(&result.combinations["A ∩ B ∩ C"]), vec!["x"]);
    for (key, list) in &result.combinations {
        if key != "A ∩ B ∩ C" {
            assert!(!list.items.contains(&"x".to_string()), "x leaked into {}", key);
        }
    }

    // Exactly-A-and-B excludes x even though the plain intersection has it
    assert_eq!(item_strs(&result.combinations["A ∩ B"]), vec!["ab"]);
    assert_eq!(item_strs(&result.intersections["A ∩ B"]), vec!["ab", "x"]);
    assert_eq!(item_strs(&result.combinations["B ∩ C"]), vec!["bc"]);
    assert!(!result.combinations.contains_key("A ∩ C"));
}

#[test]
fn test_combination_keys_follow_group_order() {
    let result = analyze(three_way(), &AnalysisOptions::default()).unwrap();
    let keys: Vec<&str> = result.combinations.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["A", "B", "C", "A ∩ B", "B ∩ C", "A ∩ B ∩ C"]);

    let coverage_keys: Vec<&str> = result.coverage_matrix.keys().map(String::as_str).collect();
    assert_eq!(
        coverage_keys,
        vec!["A→B", "A→C", "B→A", "B→C", "C→A", "C→B"]
    );
}

#[test]
fn test_coverage_rounds_to_two_decimals() {
    let result = analyze(
        groups(&[("A", &["a", "b", "c"]), ("B", &["a"])]),
        &AnalysisOptions::default(),
    )
    .unwrap();
    assert_eq!(result.coverage_matrix["A→B"].percentage, 33.33);
    assert_eq!(result.coverage_matrix["B→A"].percentage, 100.0);
    assert!(result.coverage_matrix["B→A"].missing.is_empty());
}

// ============================================================================
// FUZZY MATCHING
// ============================================================================

#[test]
fn test_korean_and_english_names_cluster() {
    let options = AnalysisOptions {
        threshold: 60,
        ..Default::default()
    };
    let result = analyze(
        groups(&[("A", &["건국대학교"]), ("B", &["Konkuk University"])]),
        &options,
    )
    .unwrap();

    assert_eq!(result.similar_groups.len(), 1);
    let cluster = &result.similar_groups[0];
    assert!(cluster.items.contains_key("건국대학교"));
    assert!(cluster.items.contains_key("Konkuk University"));
    assert_eq!(cluster.items["건국대학교"], vec!["A"]);
    assert_eq!(cluster.items["Konkuk University"], vec!["B"]);
}

#[test]
fn test_suggestions_for_near_miss() {
    let result = analyze(
        groups(&[
            ("Sheet", &["Yonsei Univ"]),
            ("Roster", &["Yonsei University", "Korea University"]),
        ]),
        &AnalysisOptions::default(),
    )
    .unwrap();

    let missing = &result.coverage_matrix["Sheet→Roster"].missing;
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].suggestions[0].text, "Yonsei University");
    assert!(missing[0].suggestions[0].score >= 75);
}

#[test]
fn test_pasted_rosters() {
    let mut g = Groups::new();
    g.insert("Club A".to_string(), parse_input(ROSTER_A));
    g.insert("Club B".to_string(), parse_input(ROSTER_B));

    let result = analyze(g, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.group_sizes["Club A"], 4);
    assert_eq!(result.group_sizes["Club B"], 4);
    assert_eq!(
        item_strs(&result.intersections["Club A ∩ Club B"]),
        vec!["KAIST", "Yonsei University"]
    );

    // "geonguk" vs "konkuk" stays under 75, and sharing "University" with
    // the other names is not enough, so the Korean spelling stays alone
    assert!(result
        .similar_groups
        .iter()
        .all(|c| !c.items.contains_key("건국대학교")));
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_all_groups_empty_is_input_error() {
    let err = analyze(
        groups(&[("A", &[]), ("B", &[])]),
        &AnalysisOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::NoData));
    assert!(err.is_input_error());
    assert_eq!(err.status_code(), 400);
}

#[test]
fn test_single_group() {
    let result = analyze(groups(&[("Solo", &["a", "b"])]), &AnalysisOptions::default()).unwrap();
    assert!(result.intersections.is_empty());
    assert!(result.coverage_matrix.is_empty());
    assert_eq!(item_strs(&result.combinations["Solo"]), vec!["a", "b"]);
    assert_eq!(item_strs(&result.unique_items["Solo"]), vec!["a", "b"]);
}

#[test]
fn test_result_serializes_to_nested_json() {
    let result = analyze(
        groups(&[("A", &["x", "y"]), ("B", &["y", "z"])]),
        &AnalysisOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["group_names"], serde_json::json!(["A", "B"]));
    assert_eq!(json["intersections"]["A ∩ B"]["count"], 1);
    assert_eq!(json["coverage_matrix"]["A→B"]["percentage"], 50.0);
    assert!(json["similar_groups"].is_array());
}
