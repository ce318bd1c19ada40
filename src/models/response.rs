use serde::{Deserialize, Serialize};

/// Envelope every console endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

/// List envelope used by paged endpoints.
#[derive(Debug, Deserialize, Serialize)]
pub struct PageResult<T> {
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}
