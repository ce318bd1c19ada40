mod config_tests;
mod endpoint_tests;
mod error_tests;
mod query_tests;
