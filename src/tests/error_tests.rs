use crate::error::{ErrorContext, TagOpsError};
use crate::tagops_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let tagops_result = result.context("Failed to read config file");
    assert!(tagops_result.is_err());

    match tagops_result {
        Err(TagOpsError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected TagOpsError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Token not found");

    assert!(result.is_err());
    match result {
        Err(TagOpsError::Unknown(msg)) => {
            assert_eq!(msg, "Token not found");
        }
        _ => panic!("Expected TagOpsError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let tagops_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    assert!(tagops_result.is_err());
    match tagops_result {
        Err(TagOpsError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected TagOpsError::Unknown"),
    }
}

#[test]
fn test_tagops_error_macro() {
    let error = tagops_error!(HttpError, "Request failed");
    match error {
        TagOpsError::HttpError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected TagOpsError::HttpError"),
    }

    let error = tagops_error!(InvalidInput, "Invalid query: {}", "name");
    match error {
        TagOpsError::InvalidInput(msg) => assert_eq!(msg, "Invalid query: name"),
        _ => panic!("Expected TagOpsError::InvalidInput"),
    }
}

#[test]
fn test_api_error_message_carries_code_and_msg() {
    let error = TagOpsError::ApiError {
        code: 500,
        msg: "server exploded".to_string(),
    };

    assert_eq!(error.to_string(), "API error 500: server exploded");
}
