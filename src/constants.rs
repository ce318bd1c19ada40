pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/api";
pub const CONFIG_FILE: &str = ".tagops-config.json";

pub const URL_ENV_VAR: &str = "TAGOPS_URL";
pub const TOKEN_ENV_VAR: &str = "TAGOPS_TOKEN";

// Response code the console reports for a successful call
pub const API_SUCCESS_CODE: i32 = 200;
