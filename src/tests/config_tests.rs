use std::fs;

use crate::config::Config;

#[test]
fn test_config_round_trip() {
    let config = Config {
        base_url: Some("https://console.example.com/api".to_string()),
        token: Some("secret-token".to_string()),
        default_team_id: Some(7),
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    let loaded: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(loaded.base_url, config.base_url);
    assert_eq!(loaded.token, config.token);
    assert_eq!(loaded.default_team_id, config.default_team_id);
}

#[test]
fn test_partial_config_fills_defaults() {
    let loaded: Config = serde_json::from_str(r#"{ "token": "abc" }"#).unwrap();

    assert_eq!(loaded.token.as_deref(), Some("abc"));
    assert!(loaded.base_url.is_none());
    assert!(loaded.default_team_id.is_none());
}

#[test]
fn test_garbage_config_falls_back_to_default() {
    let loaded: Config = serde_json::from_str("not json").unwrap_or_default();

    assert!(loaded.base_url.is_none());
    assert!(loaded.token.is_none());
}
