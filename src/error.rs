#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagOpsError {
    #[error("Credentials not found. Please run 'tagops auth' to configure.")]
    CredentialsNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API error {code}: {msg}")]
    ApiError { code: i32, msg: String },

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Missing path parameter '{{{0}}}'")]
    MissingPathParam(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type TagOpsResult<T> = Result<T, TagOpsError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TagOpsResult<T>;
    fn with_context<F>(self, f: F) -> TagOpsResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TagOpsResult<T> {
        self.map_err(|e| TagOpsError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TagOpsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TagOpsError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TagOpsResult<T> {
        self.ok_or_else(|| TagOpsError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TagOpsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TagOpsError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! tagops_error {
    ($error_type:ident, $msg:expr) => {
        TagOpsError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        TagOpsError::$error_type(format!($fmt, $($arg)*))
    };
}
