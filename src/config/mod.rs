pub mod config;

pub use config::{get_credentials, load_config, save_config, Config};
