use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TagTree {
    pub id: u64,
    pub pid: u64,
    pub code: String,
    pub name: String,
    #[serde(rename = "codePath")]
    pub code_path: Option<String>,
    pub remark: Option<String>,
    #[serde(default)]
    pub children: Vec<TagTree>,
}

#[derive(Debug, Serialize)]
pub struct SaveTagTree {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub pid: u64,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}
