//! Unit tests for domain error types

use opconf_domain::Error;

#[test]
fn test_unknown_option_error() {
    let error = Error::unknown_option("cookies");
    match &error {
        Error::UnknownOption { key } => assert_eq!(key, "cookies"),
        _ => panic!("Expected UnknownOption error"),
    }
    assert_eq!(error.to_string(), "Unknown option: cookies");
    assert_eq!(error.option_key(), Some("cookies"));
}

#[test]
fn test_invalid_type_error() {
    let error = Error::invalid_type("verify", "boolean", "string");
    assert_eq!(
        error.to_string(),
        "Invalid type for option 'verify': expected boolean, found string"
    );
    assert!(error.is_validation());
}

#[test]
fn test_invalid_value_error() {
    let error = Error::invalid_value("timeout", "must be >= 0, got -1");
    match error {
        Error::InvalidValue { key, message } => {
            assert_eq!(key, "timeout");
            assert!(message.contains("-1"));
        }
        _ => panic!("Expected InvalidValue error"),
    }
}

#[test]
fn test_configuration_error_is_not_validation() {
    let error = Error::config("bad file");
    assert!(!error.is_validation());
    assert!(error.option_key().is_none());
    assert_eq!(error.to_string(), "Configuration error: bad file");
}

#[test]
fn test_io_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::io_with_source("Failed to write config", io);
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to write config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}
