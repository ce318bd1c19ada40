use serde_json::{json, Value};

use crate::api::endpoint;
use crate::client::ApiClient;
use crate::error::TagOpsResult;
use crate::models::*;

/// Typed wrapper over the endpoint registry, one method per operation.
pub struct ConsoleClient {
    api: ApiClient,
}

impl ConsoleClient {
    pub fn new(base_url: String, token: String) -> TagOpsResult<Self> {
        Ok(Self {
            api: ApiClient::new(base_url, token)?,
        })
    }

    /// Tag paths the calling account is associated with.
    pub async fn get_account_tags(&self) -> TagOpsResult<Vec<String>> {
        self.api.send(endpoint::GET_ACCOUNT_TAGS, None).await
    }

    pub async fn list_by_query(&self, query: Value) -> TagOpsResult<Vec<TagTree>> {
        self.api.send(endpoint::LIST_BY_QUERY, Some(query)).await
    }

    pub async fn get_tag_trees(&self) -> TagOpsResult<Vec<TagTree>> {
        self.api.send(endpoint::GET_TAG_TREES, None).await
    }

    pub async fn save_tag_tree(&self, tag: &SaveTagTree) -> TagOpsResult<()> {
        let params = serde_json::to_value(tag)?;
        self.api
            .send_no_content(endpoint::SAVE_TAG_TREE, Some(params))
            .await
    }

    pub async fn del_tag_tree(&self, id: u64) -> TagOpsResult<()> {
        self.api
            .send_no_content(endpoint::DEL_TAG_TREE, Some(json!({ "id": id })))
            .await
    }

    pub async fn get_teams(
        &self,
        page_num: Option<u64>,
        page_size: Option<u64>,
    ) -> TagOpsResult<PageResult<Team>> {
        let params = json!({
            "pageNum": page_num.unwrap_or(1),
            "pageSize": page_size.unwrap_or(50),
        });
        self.api.send(endpoint::GET_TEAMS, Some(params)).await
    }

    pub async fn save_team(&self, team: &SaveTeam) -> TagOpsResult<()> {
        let params = serde_json::to_value(team)?;
        self.api
            .send_no_content(endpoint::SAVE_TEAM, Some(params))
            .await
    }

    pub async fn del_team(&self, id: u64) -> TagOpsResult<()> {
        self.api
            .send_no_content(endpoint::DEL_TEAM, Some(json!({ "id": id })))
            .await
    }

    pub async fn get_team_members(
        &self,
        team_id: u64,
        page_num: Option<u64>,
        page_size: Option<u64>,
    ) -> TagOpsResult<PageResult<TeamMember>> {
        let params = json!({
            "teamId": team_id,
            "pageNum": page_num.unwrap_or(1),
            "pageSize": page_size.unwrap_or(50),
        });
        self.api.send(endpoint::GET_TEAM_MEM, Some(params)).await
    }

    pub async fn save_team_member(&self, team_id: u64, member: &SaveTeamMember) -> TagOpsResult<()> {
        let mut params = serde_json::to_value(member)?;
        params["teamId"] = json!(team_id);
        self.api
            .send_no_content(endpoint::SAVE_TEAM_MEM, Some(params))
            .await
    }

    pub async fn del_team_member(&self, team_id: u64, account_id: u64) -> TagOpsResult<()> {
        self.api
            .send_no_content(
                endpoint::DEL_TEAM_MEM,
                Some(json!({ "teamId": team_id, "accountId": account_id })),
            )
            .await
    }

    pub async fn get_team_tag_ids(&self, team_id: u64) -> TagOpsResult<Vec<u64>> {
        self.api
            .send(endpoint::GET_TEAM_TAG_IDS, Some(json!({ "teamId": team_id })))
            .await
    }

    pub async fn save_team_tags(&self, team_id: u64, tags: &SaveTeamTags) -> TagOpsResult<()> {
        let mut params = serde_json::to_value(tags)?;
        params["teamId"] = json!(team_id);
        self.api
            .send_no_content(endpoint::SAVE_TEAM_TAGS, Some(params))
            .await
    }
}
