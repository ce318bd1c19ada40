use serde_json::json;

use crate::error::TagOpsError;
use crate::query::parse_query_pairs;

#[test]
fn test_parse_single_pair() {
    let query = parse_query_pairs(["name=prod"]).unwrap();
    assert_eq!(query, json!({ "name": "prod" }));
}

#[test]
fn test_parse_multiple_pairs() {
    let query = parse_query_pairs(["name=prod", "codePath=root/db"]).unwrap();
    assert_eq!(query, json!({ "name": "prod", "codePath": "root/db" }));
}

#[test]
fn test_value_may_contain_equals() {
    let query = parse_query_pairs(["filter=a=b"]).unwrap();
    assert_eq!(query, json!({ "filter": "a=b" }));
}

#[test]
fn test_empty_value_is_allowed() {
    let query = parse_query_pairs(["name="]).unwrap();
    assert_eq!(query, json!({ "name": "" }));
}

#[test]
fn test_pair_without_equals_is_rejected() {
    let result = parse_query_pairs(["justakey"]);
    assert!(matches!(result, Err(TagOpsError::InvalidInput(_))));
}

#[test]
fn test_empty_key_is_rejected() {
    let result = parse_query_pairs(["=value"]);
    assert!(matches!(result, Err(TagOpsError::InvalidInput(_))));
}

#[test]
fn test_no_pairs_yields_empty_object() {
    let query = parse_query_pairs(std::iter::empty()).unwrap();
    assert_eq!(query, json!({}));
}
