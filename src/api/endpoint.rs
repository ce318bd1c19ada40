/// HTTP request descriptors for the console's tag-tree and team endpoints.
///
/// Each binding pairs an operation name with a method and a path template.
/// Templates use `{param}` placeholders substituted at call time by the
/// API client; no validation happens at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    const fn get(name: &'static str, path: &'static str) -> Self {
        Endpoint {
            name,
            method: Method::Get,
            path,
        }
    }

    const fn post(name: &'static str, path: &'static str) -> Self {
        Endpoint {
            name,
            method: Method::Post,
            path,
        }
    }

    const fn delete(name: &'static str, path: &'static str) -> Self {
        Endpoint {
            name,
            method: Method::Delete,
            path,
        }
    }
}

pub const GET_ACCOUNT_TAGS: Endpoint = Endpoint::get("getAccountTags", "/tag-trees/account-has");
pub const LIST_BY_QUERY: Endpoint = Endpoint::get("listByQuery", "/tag-trees/query");
pub const GET_TAG_TREES: Endpoint = Endpoint::get("getTagTrees", "/tag-trees");
pub const SAVE_TAG_TREE: Endpoint = Endpoint::post("saveTagTree", "/tag-trees");
pub const DEL_TAG_TREE: Endpoint = Endpoint::delete("delTagTree", "/tag-trees/{id}");

pub const GET_TEAMS: Endpoint = Endpoint::get("getTeams", "/teams");
pub const SAVE_TEAM: Endpoint = Endpoint::post("saveTeam", "/teams");
pub const DEL_TEAM: Endpoint = Endpoint::delete("delTeam", "/teams/{id}");

pub const GET_TEAM_MEM: Endpoint = Endpoint::get("getTeamMem", "/teams/{teamId}/members");
pub const SAVE_TEAM_MEM: Endpoint = Endpoint::post("saveTeamMem", "/teams/{teamId}/members");
pub const DEL_TEAM_MEM: Endpoint =
    Endpoint::delete("delTeamMem", "/teams/{teamId}/members/{accountId}");

pub const GET_TEAM_TAG_IDS: Endpoint = Endpoint::get("getTeamTagIds", "/teams/{teamId}/tags");
pub const SAVE_TEAM_TAGS: Endpoint = Endpoint::post("saveTeamTags", "/teams/{teamId}/tags");

/// Every registered endpoint, for registry-wide assertions.
pub const ALL: [Endpoint; 13] = [
    GET_ACCOUNT_TAGS,
    LIST_BY_QUERY,
    GET_TAG_TREES,
    SAVE_TAG_TREE,
    DEL_TAG_TREE,
    GET_TEAMS,
    SAVE_TEAM,
    DEL_TEAM,
    GET_TEAM_MEM,
    SAVE_TEAM_MEM,
    DEL_TEAM_MEM,
    GET_TEAM_TAG_IDS,
    SAVE_TEAM_TAGS,
];
