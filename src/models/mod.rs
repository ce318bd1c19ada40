pub mod response;
pub mod tag;
pub mod team;

// Re-export commonly used types
pub use response::{ApiResponse, PageResult};
pub use tag::{SaveTagTree, TagTree};
pub use team::{SaveTeam, SaveTeamMember, SaveTeamTags, Team, TeamMember};
