use std::collections::HashSet;

use serde_json::{json, Map, Value};

use crate::api::endpoint::{self, Method};
use crate::client::api_client::render_path;
use crate::error::TagOpsError;

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected a JSON object"),
    }
}

#[test]
fn test_registry_names_unique() {
    let names: HashSet<&str> = endpoint::ALL.iter().map(|e| e.name).collect();
    assert_eq!(names.len(), endpoint::ALL.len());
}

#[test]
fn test_registry_routes_unique() {
    let routes: HashSet<(&str, &str)> = endpoint::ALL
        .iter()
        .map(|e| (e.method.as_str(), e.path))
        .collect();
    assert_eq!(routes.len(), endpoint::ALL.len());
}

#[test]
fn test_registry_methods_match_operations() {
    assert_eq!(endpoint::GET_ACCOUNT_TAGS.method, Method::Get);
    assert_eq!(endpoint::GET_ACCOUNT_TAGS.path, "/tag-trees/account-has");
    assert_eq!(endpoint::LIST_BY_QUERY.method, Method::Get);
    assert_eq!(endpoint::LIST_BY_QUERY.path, "/tag-trees/query");
    assert_eq!(endpoint::SAVE_TAG_TREE.method, Method::Post);
    assert_eq!(endpoint::SAVE_TAG_TREE.path, "/tag-trees");
    assert_eq!(endpoint::DEL_TAG_TREE.method, Method::Delete);
    assert_eq!(endpoint::DEL_TAG_TREE.path, "/tag-trees/{id}");
    assert_eq!(endpoint::SAVE_TEAM_MEM.method, Method::Post);
    assert_eq!(endpoint::SAVE_TEAM_MEM.path, "/teams/{teamId}/members");
    assert_eq!(endpoint::SAVE_TEAM_TAGS.method, Method::Post);
    assert_eq!(endpoint::SAVE_TEAM_TAGS.path, "/teams/{teamId}/tags");
}

#[test]
fn test_del_team_mem_path_substitution() {
    let (path, rest) = render_path(
        endpoint::DEL_TEAM_MEM.path,
        params(json!({ "teamId": 5, "accountId": 9 })),
    )
    .unwrap();

    assert_eq!(path, "/teams/5/members/9");
    assert!(rest.is_empty());
}

#[test]
fn test_remaining_params_survive_substitution() {
    let (path, rest) = render_path(
        endpoint::SAVE_TEAM_TAGS.path,
        params(json!({ "teamId": 3, "tagIds": [1, 2, 3] })),
    )
    .unwrap();

    assert_eq!(path, "/teams/3/tags");
    assert_eq!(rest.len(), 1);
    assert_eq!(rest["tagIds"], json!([1, 2, 3]));
}

#[test]
fn test_template_without_placeholders_passes_through() {
    let (path, rest) = render_path(
        endpoint::GET_TAG_TREES.path,
        params(json!({ "name": "prod" })),
    )
    .unwrap();

    assert_eq!(path, "/tag-trees");
    assert_eq!(rest["name"], json!("prod"));
}

#[test]
fn test_missing_path_param_is_an_error() {
    let result = render_path(endpoint::DEL_TEAM_MEM.path, params(json!({ "teamId": 5 })));

    match result {
        Err(TagOpsError::MissingPathParam(name)) => assert_eq!(name, "accountId"),
        other => panic!("Expected MissingPathParam, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_scalar_path_param_is_an_error() {
    let result = render_path(
        endpoint::DEL_TAG_TREE.path,
        params(json!({ "id": { "nested": true } })),
    );

    assert!(matches!(result, Err(TagOpsError::InvalidInput(_))));
}

#[test]
fn test_string_path_params_substitute_verbatim() {
    let (path, _) = render_path(
        endpoint::DEL_TAG_TREE.path,
        params(json!({ "id": "12,13" })),
    )
    .unwrap();

    assert_eq!(path, "/tag-trees/12,13");
}
