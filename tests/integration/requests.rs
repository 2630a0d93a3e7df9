//! Form-style requests through `handle_request`.

use serde_json::json;
use setsift::{
    default_group_name, handle_request, handle_request_str, AnalysisError, AnalysisOptions,
    AnalyzeRequest, ErrorResponse,
};

#[test]
fn test_request_with_pasted_cells() {
    let body = json!({
        "num_groups": 2,
        "group_0_name": "Club A",
        "group_0_data": "apple\nbanana\n\"cherry\npie\"",
        "group_1_name": "Club B",
        "group_1_data": "banana\ncherry pie\ndurian",
    });
    let result = handle_request(&body, &AnalysisOptions::default()).unwrap();

    assert_eq!(result.group_names, vec!["Club A", "Club B"]);
    assert_eq!(
        result.intersections["Club A ∩ Club B"].items,
        vec!["banana", "cherry pie"]
    );
    assert_eq!(result.coverage_matrix["Club A→Club B"].percentage, 66.67);
}

#[test]
fn test_missing_fields_use_defaults() {
    let request = AnalyzeRequest::from_value(&json!({ "group_1_data": "x" })).unwrap();
    assert_eq!(request.groups.len(), 2);
    assert_eq!(request.groups[0].name, default_group_name(0));
    assert_eq!(request.groups[0].name, "그룹 1");
    assert_eq!(request.groups[1].name, "그룹 2");
    assert_eq!(request.groups[0].data, "");
    assert_eq!(request.groups[1].data, "x");
}

#[test]
fn test_empty_groups_are_dropped_from_request() {
    let body = json!({
        "num_groups": 3,
        "group_0_data": "a",
        "group_2_data": "a\nb",
    });
    let result = handle_request(&body, &AnalysisOptions::default()).unwrap();
    assert_eq!(result.group_names, vec!["그룹 1", "그룹 3"]);
}

#[test]
fn test_request_without_data_is_input_error() {
    let err = handle_request(&json!({ "num_groups": 2 }), &AnalysisOptions::default())
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NoData));
    assert_eq!(err.status_code(), 400);

    let response = ErrorResponse {
        error: err.to_string(),
    };
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "error": "at least one group must contain data" })
    );
}

#[test]
fn test_bad_bodies_are_server_errors() {
    let options = AnalysisOptions::default();

    let err = handle_request_str("not json", &options).unwrap_err();
    assert!(matches!(err, AnalysisError::Json(_)));
    assert_eq!(err.status_code(), 500);

    let err = handle_request(&json!({ "num_groups": "two" }), &options).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedRequest(_)));

    let err = handle_request(&json!({ "group_0_data": 7 }), &options).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedRequest(_)));

    let err = handle_request(&json!(["a", "b"]), &options).unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedRequest(_)));
}

#[test]
fn test_threshold_out_of_range() {
    let options = AnalysisOptions {
        threshold: 101,
        ..Default::default()
    };
    let err = handle_request(&json!({ "group_0_data": "a" }), &options).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::InvalidThreshold {
            name: "threshold",
            value: 101
        }
    ));
}

#[test]
fn test_raw_body_matches_value_body() {
    let raw = r#"{"group_0_name":"A","group_0_data":"x\ny","group_1_name":"B","group_1_data":"y"}"#;
    let options = AnalysisOptions::default();
    let from_str = handle_request_str(raw, &options).unwrap();
    let from_value = handle_request(&serde_json::from_str(raw).unwrap(), &options).unwrap();
    assert_eq!(from_str, from_value);
}
