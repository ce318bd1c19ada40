use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub remark: Option<String>,
    #[serde(rename = "createTime")]
    pub create_time: Option<String>,
    pub creator: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TeamMember {
    pub id: u64,
    #[serde(rename = "teamId")]
    pub team_id: u64,
    #[serde(rename = "accountId")]
    pub account_id: u64,
    pub username: Option<String>,
    #[serde(rename = "createTime")]
    pub create_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveTeam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveTeamMember {
    #[serde(rename = "accountId")]
    pub account_id: u64,
}

#[derive(Debug, Serialize)]
pub struct SaveTeamTags {
    #[serde(rename = "tagIds")]
    pub tag_ids: Vec<u64>,
}
