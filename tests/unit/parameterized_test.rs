//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use rulestat::paths::{result_file_name, rule_name_of};
use rulestat::result_file::extract_value;
use test_case::test_case;

// =============================================================================
// Line Matching Tests
// =============================================================================

#[test_case("score: 5\n", Some("5") ; "simple line")]
#[test_case("score: 5 ms\n", Some("5") ; "extra tokens ignored")]
#[test_case("score:\t5\n", Some("5") ; "tab separated")]
#[test_case("  score:   5\n", Some("5") ; "leading whitespace")]
#[test_case("score:\n", None ; "single token line")]
#[test_case("score:5\n", None ; "no space after colon")]
#[test_case("score 5\n", None ; "missing colon")]
#[test_case("my-score: 5\n", None ; "different key")]
#[test_case("score: 1\n\nscore: 3\n", Some("3") ; "last match wins")]
#[test_case("score: 1\nscore:\n", Some("1") ; "trailing short line ignored")]
#[test_case("score: 1\rscore: 2\r", Some("2") ; "lone carriage returns split lines")]
#[test_case("score: 1\r\nscore: 2\r\n", Some("2") ; "crlf line endings")]
#[test_case("other: 1\rscore:\r", None ; "short line after carriage return")]
fn test_extract(text: &str, expected: Option<&str>) {
    assert_eq!(extract_value(text, "score"), expected);
}

#[test_case("Time-Positive", "Time-Positive: 12.25\n", Some("12.25") ; "hyphenated key")]
#[test_case("#Rules", "#Rules: 140\n", Some("140") ; "hash prefixed key")]
#[test_case("Core-Stratified", "Core-Stratified: 0\nTimeout: 1\n", Some("0") ; "first of many keys")]
fn test_extract_reasoner_keys(key: &str, text: &str, expected: Option<&str>) {
    assert_eq!(extract_value(text, key), expected);
}

// =============================================================================
// Result File Name Tests
// =============================================================================

#[test_case("a", "a.result" ; "plain name")]
#[test_case("owl.rls", "owl.rls.result" ; "name with extension")]
#[test_case(".hidden", ".hidden.result" ; "hidden name")]
fn test_result_file_name(rule: &str, expected: &str) {
    assert_eq!(result_file_name(rule), expected);
    assert_eq!(rule_name_of(expected), rule);
}
