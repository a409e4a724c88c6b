//! Client configuration type tests

use opconf_infrastructure::config::{
    ClientConfig, ConfigBuilder, ConnectionConfig, LoggingConfig, RedirectConfig, RetryConfig,
};
use opconf_domain::{CertSource, Error};
use opconf_infrastructure::constants::DEFAULT_USER_AGENT;

#[test]
fn test_client_defaults() {
    let config = ClientConfig::default();

    assert_eq!(config.connection.timeout_secs, 100);
    assert!(config.connection.verify);
    assert!(config.connection.cert.is_none());
    assert_eq!(config.connection.data_block_size, 4096);

    assert!(config.redirect.allow);
    assert_eq!(config.redirect.max_redirects, 30);

    assert!(config.proxies.proxies.is_empty());
    assert!(config.proxies.use_env_settings);

    assert_eq!(config.retry.retries, 0);
    assert!((config.retry.backoff_factor - 0.8).abs() < f64::EPSILON);
    assert_eq!(config.retry.max_backoff_secs, 90);

    assert!(config.headers.is_empty());
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert!(config.user_agent.starts_with("opconf/"));
    assert!(!config.enable_http_logger);
}

#[test]
fn test_add_user_agent_appends_with_space() {
    let mut config = ClientConfig::default();
    config.add_user_agent("azure-cli/2.0");
    config.add_user_agent("  ");
    config.add_user_agent("extension/1.1");

    assert_eq!(
        config.user_agent,
        format!("{DEFAULT_USER_AGENT} azure-cli/2.0 extension/1.1")
    );
}

#[test]
fn test_control_characters_in_user_agent_are_rejected() {
    let mut config = ClientConfig::default();
    config.user_agent = "\n".to_string();
    let err = opconf_infrastructure::config::validate_client_config(&mut config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_builder_normalizes_proxies() {
    let config = ConfigBuilder::new()
        .with_proxy("HTTPS", "http://10.10.1.10:1080")
        .with_env_proxies(false)
        .build()
        .unwrap();

    assert_eq!(config.proxies.proxies["https"], "http://10.10.1.10:1080");
    assert!(!config.proxies.use_env_settings);
}

#[test]
fn test_builder_rejects_bad_proxy() {
    let err = ConfigBuilder::new()
        .with_proxy("http", "localhost:3128")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[test]
fn test_builder_rejects_zero_block_size() {
    let err = ConfigBuilder::new()
        .with_connection(ConnectionConfig {
            data_block_size: 0,
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_builder_rejects_negative_backoff() {
    let err = ConfigBuilder::new()
        .with_retry(RetryConfig {
            backoff_factor: -1.0,
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_builder_rejects_bad_log_level() {
    let err = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_builder_rejects_bad_header_name() {
    assert!(
        ConfigBuilder::new()
            .with_header("X Custom", "1")
            .build()
            .is_err()
    );
    let config = ConfigBuilder::new()
        .with_header("x-ms-client-request-id", "abc")
        .build()
        .unwrap();
    assert_eq!(config.headers["x-ms-client-request-id"], "abc");
}

#[test]
fn test_builder_rejects_blank_cert() {
    let err = ConfigBuilder::new()
        .with_connection(ConnectionConfig {
            cert: Some(CertSource::Single("".into())),
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[test]
fn test_builder_keeps_redirect_settings() {
    let config = ConfigBuilder::new()
        .with_redirect(RedirectConfig {
            allow: false,
            max_redirects: 2,
        })
        .build()
        .unwrap();
    assert!(!config.redirect.allow);
    assert_eq!(config.redirect.max_redirects, 2);
}
