use std::collections::HashSet;

use serde_json::{json, Map, Value};

use tagops_cli::api::endpoint::{self, Endpoint, Method};
use tagops_cli::client::api_client::render_path;

fn placeholder_names(endpoint: &Endpoint) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = endpoint.path;
    while let Some(start) = rest.find('{') {
        let end = rest[start..].find('}').expect("Unbalanced placeholder") + start;
        names.push(&rest[start + 1..end]);
        rest = &rest[end + 1..];
    }
    names
}

#[test]
fn every_endpoint_renders_with_its_placeholders_filled() {
    for endpoint in endpoint::ALL {
        let mut params = Map::new();
        for (i, name) in placeholder_names(&endpoint).iter().enumerate() {
            params.insert(name.to_string(), json!(i + 1));
        }

        let (path, rest) = render_path(endpoint.path, params)
            .unwrap_or_else(|e| panic!("{} failed to render: {}", endpoint.name, e));

        assert!(
            !path.contains('{') && !path.contains('}'),
            "{} left an unsubstituted placeholder: {}",
            endpoint.name,
            path
        );
        assert!(rest.is_empty(), "{} leaked params into the path", endpoint.name);
    }
}

#[test]
fn registry_names_and_routes_are_unique() {
    let names: HashSet<&str> = endpoint::ALL.iter().map(|e| e.name).collect();
    assert_eq!(names.len(), endpoint::ALL.len());

    let routes: HashSet<(&str, &str)> = endpoint::ALL
        .iter()
        .map(|e| (e.method.as_str(), e.path))
        .collect();
    assert_eq!(routes.len(), endpoint::ALL.len());
}

#[test]
fn registry_matches_the_console_surface() {
    let expected = [
        ("getAccountTags", Method::Get, "/tag-trees/account-has"),
        ("listByQuery", Method::Get, "/tag-trees/query"),
        ("getTagTrees", Method::Get, "/tag-trees"),
        ("saveTagTree", Method::Post, "/tag-trees"),
        ("delTagTree", Method::Delete, "/tag-trees/{id}"),
        ("getTeams", Method::Get, "/teams"),
        ("saveTeam", Method::Post, "/teams"),
        ("delTeam", Method::Delete, "/teams/{id}"),
        ("getTeamMem", Method::Get, "/teams/{teamId}/members"),
        ("saveTeamMem", Method::Post, "/teams/{teamId}/members"),
        (
            "delTeamMem",
            Method::Delete,
            "/teams/{teamId}/members/{accountId}",
        ),
        ("getTeamTagIds", Method::Get, "/teams/{teamId}/tags"),
        ("saveTeamTags", Method::Post, "/teams/{teamId}/tags"),
    ];

    assert_eq!(endpoint::ALL.len(), expected.len());

    for (name, method, path) in expected {
        let entry = endpoint::ALL
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("Missing endpoint: {}", name));
        assert_eq!(entry.method, method, "{} method mismatch", name);
        assert_eq!(entry.path, path, "{} path mismatch", name);
    }
}

#[test]
fn extra_params_remain_for_query_or_body() {
    let (path, rest) = render_path(
        endpoint::GET_TEAM_MEM.path,
        match json!({ "teamId": 4, "pageNum": 1, "pageSize": 20 }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        },
    )
    .unwrap();

    assert_eq!(path, "/teams/4/members");
    assert_eq!(rest.len(), 2);
    assert_eq!(rest["pageNum"], json!(1));
    assert_eq!(rest["pageSize"], json!(20));
}
