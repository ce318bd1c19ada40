// Module declarations
pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod query;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{ApiClient, ConsoleClient};
pub use config::{get_credentials, load_config, save_config, Config};
pub use models::*;
