use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::{CONFIG_FILE, DEFAULT_BASE_URL, TOKEN_ENV_VAR, URL_ENV_VAR};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub default_team_id: Option<u64>,
}

pub fn load_config() -> Config {
    let home_dir = match dirs::home_dir() {
        Some(dir) => dir,
        None => return Config::default(),
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        match fs::read_to_string(&config_path) {
            Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Resolved (base_url, token). Environment variables win over the config
/// file; the base URL falls back to the default when unset everywhere.
pub fn get_credentials() -> Result<(String, String), Box<dyn std::error::Error>> {
    let config = load_config();

    let base_url = env::var(URL_ENV_VAR)
        .ok()
        .or(config.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        return Ok((base_url, token));
    }

    if let Some(token) = config.token {
        return Ok((base_url, token));
    }

    Err(format!(
        "No token found. Set {} environment variable or run 'tagops auth' to configure.",
        TOKEN_ENV_VAR
    )
    .into())
}
