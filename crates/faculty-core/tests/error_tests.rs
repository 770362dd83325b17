// Rust guideline compliant 2026-10-16

//! Unit tests for error types and messages.

use faculty_core::{Error, ErrorCategory};
use std::path::PathBuf;

#[test]
fn test_parse_errors_are_parse_category() {
    assert_eq!(
        Error::InvalidParameterValue("foo".to_string()).category(),
        ErrorCategory::Parse
    );
    assert_eq!(
        Error::InvalidRunIdentifier("2.".to_string()).category(),
        ErrorCategory::Parse
    );
}

#[test]
fn test_insecure_permissions_message() {
    let error = Error::InsecurePermissions(PathBuf::from("/home/me/.config/faculty/credentials"));
    let msg = error.to_string();
    assert!(msg.starts_with("Permissions for /home/me/.config/faculty/credentials are too open."));
    assert!(msg.contains("chmod 0600 /home/me/.config/faculty/credentials"));
    assert_eq!(error.category(), ErrorCategory::Credentials);
}

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::from(io_err);
    assert!(error.to_string().contains("IO error"));
    assert_eq!(error.category(), ErrorCategory::Io);
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let error = Error::Json(json_err);
    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_credentials_error_formatting() {
    let error = Error::Credentials("client_id is not set".to_string());
    assert_eq!(error.to_string(), "Credentials error: client_id is not set");
}
