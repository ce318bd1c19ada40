pub mod tags;
pub mod teams;
pub mod utils;

pub use tags::{print_account_tags, print_tag_trees};
pub use teams::{print_team_members, print_team_tag_ids, print_teams};
pub use utils::{format_relative_time, truncate};
