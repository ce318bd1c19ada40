pub mod api_client;
pub mod console_client;

pub use api_client::ApiClient;
pub use console_client::ConsoleClient;
