pub mod auth;
pub mod members;
pub mod tags;
pub mod team_tags;
pub mod teams;
