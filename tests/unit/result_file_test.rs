//! Tests for result file scanning

use rulestat::CombineError;
use rulestat::result_file::{extract_value, key_token, read_value};

use crate::common::TestWorkspace;

#[test]
fn test_key_token_appends_colon() {
    assert_eq!(key_token("Time-Positive"), "Time-Positive:");
}

#[test]
fn test_extract_single_match() {
    let text = "Name: owl\nscore: 5 extra tokens\n";
    assert_eq!(extract_value(text, "score"), Some("5"));
}

#[test]
fn test_extract_last_match_wins() {
    let text = "score: 1\nscore: 2\n";
    assert_eq!(extract_value(text, "score"), Some("2"));
}

#[test]
fn test_extract_empty_text() {
    assert_eq!(extract_value("", "score"), None);
}

#[test]
fn test_extract_is_case_sensitive() {
    assert_eq!(extract_value("Score: 1\n", "score"), None);
}

#[test]
fn test_extract_ignores_key_in_second_position() {
    assert_eq!(extract_value("other: score:\n", "score"), None);
}

#[test]
fn test_read_value_from_file() {
    let ws = TestWorkspace::new();
    ws.add_result("a", "Timeout: 0\nTime-Overall: 41.2\n");

    let path = ws.results_dir().join("a.result");
    assert_eq!(read_value(&path, "Time-Overall").unwrap(), Some("41.2".to_string()));
    assert_eq!(read_value(&path, "Calls-Overall").unwrap(), None);
}

#[test]
fn test_read_value_missing_file_is_error() {
    let ws = TestWorkspace::new();
    let path = ws.results_dir().join("missing.result");

    let err = read_value(&path, "score").unwrap_err();
    assert!(matches!(err, CombineError::ResultFile { .. }));
    assert!(err.to_string().contains("missing.result"));
}
