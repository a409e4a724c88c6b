//! Request settings resolution tests

use opconf_domain::{CertSource, OperationConfig, UnknownOptionPolicy};
use opconf_infrastructure::config::{ClientConfig, ConfigBuilder, ConnectionConfig, RetryConfig};
use opconf_infrastructure::constants::DEFAULT_USER_AGENT;
use opconf_infrastructure::settings::{ProxySource, RequestSettings};
use serde_json::json;
use std::time::Duration;

fn operation(value: serde_json::Value) -> OperationConfig {
    OperationConfig::from_value(&value, UnknownOptionPolicy::Reject).unwrap()
}

#[test]
fn test_empty_operation_uses_client_defaults() {
    let settings = RequestSettings::resolve(&ClientConfig::default(), &OperationConfig::default());

    assert!(settings.verify);
    assert!(settings.cert.is_none());
    assert_eq!(settings.timeout(), Duration::from_secs(100));
    assert!(settings.redirects.allow);
    assert_eq!(settings.redirects.max_redirects, 30);
    assert!(settings.proxies.proxies.is_empty());
    assert!(settings.proxies.use_env_settings);
    assert_eq!(settings.retry.retries, 0);
    assert_eq!(settings.data_block_size, 4096);
}

#[test]
fn test_operation_options_override_client() {
    let client = ConfigBuilder::new()
        .with_connection(ConnectionConfig {
            timeout_secs: 60,
            verify: false,
            cert: Some(CertSource::Single("client.pem".into())),
            ..Default::default()
        })
        .with_retry(RetryConfig {
            retries: 5,
            ..Default::default()
        })
        .with_proxy("http", "http://client-proxy:3128")
        .build()
        .unwrap();

    let op = operation(json!({
        "verify": true,
        "timeout": 30,
        "retries": 1,
        "allow_redirects": false,
        "use_env_proxies": false,
        "proxies": {"https": "http://op-proxy:3128"}
    }));

    let settings = RequestSettings::resolve(&client, &op);

    assert!(settings.verify);
    assert_eq!(settings.cert, Some(CertSource::Single("client.pem".into())));
    assert_eq!(settings.timeout_secs, 30);
    assert_eq!(settings.retry.retries, 1);
    assert!(!settings.redirects.allow);
    assert_eq!(settings.redirects.limit(), None);
    assert!(!settings.proxies.use_env_settings);
    // operation proxies replace the client mapping as a whole
    assert_eq!(settings.proxies.proxies.len(), 1);
    assert_eq!(
        settings.proxies.source_for("http", None),
        ProxySource::Direct
    );
    assert_eq!(
        settings.proxies.source_for("https", None),
        ProxySource::Explicit("http://op-proxy:3128")
    );
}

#[test]
fn test_omitted_verify_keeps_client_value() {
    let client = ConfigBuilder::new()
        .with_connection(ConnectionConfig {
            verify: false,
            ..Default::default()
        })
        .build()
        .unwrap();

    let settings = RequestSettings::resolve(&client, &operation(json!({"timeout": 5})));
    assert!(!settings.verify);
}

#[test]
fn test_explicit_proxy_wins_over_environment() {
    let op = operation(json!({
        "use_env_proxies": true,
        "proxies": {"http": "http://explicit:3128"}
    }));
    let settings = RequestSettings::resolve(&ClientConfig::default(), &op);

    assert_eq!(
        settings.proxies.source_for("http", Some("example.org")),
        ProxySource::Explicit("http://explicit:3128")
    );
    assert_eq!(
        settings.proxies.source_for("https", Some("example.org")),
        ProxySource::Environment
    );
}

#[test]
fn test_headers_and_backoff_come_from_client() {
    let client = ConfigBuilder::new()
        .with_header("Accept-Language", "en-US")
        .build()
        .unwrap();
    let settings = RequestSettings::resolve(&client, &operation(json!({"retries": 2})));

    assert_eq!(settings.headers["Accept-Language"], "en-US");
    assert_eq!(settings.retry.retries, 2);
    assert_eq!(settings.retry.max_backoff_secs, 90);
}

#[test]
fn test_user_agent_header_is_set_from_client() {
    let settings =
        RequestSettings::resolve(&ClientConfig::default(), &OperationConfig::default());
    assert_eq!(settings.headers["User-Agent"], DEFAULT_USER_AGENT);

    let client = ConfigBuilder::new()
        .with_header("user-agent", "replaced")
        .with_user_agent("my-app/1.2")
        .build()
        .unwrap();
    let settings = RequestSettings::resolve(&client, &OperationConfig::default());

    assert!(!settings.headers.contains_key("user-agent"));
    assert_eq!(
        settings.headers["User-Agent"],
        format!("{DEFAULT_USER_AGENT} my-app/1.2")
    );
}

#[test]
fn test_http_logger_operation_override() {
    let op = OperationConfig::default();
    let disabled = ClientConfig::default();
    assert!(!RequestSettings::resolve(&disabled, &op).http_logging);
    assert!(RequestSettings::resolve_with_http_logger(&disabled, &op, Some(true)).http_logging);

    let enabled = ConfigBuilder::new().with_http_logger(true).build().unwrap();
    assert!(RequestSettings::resolve(&enabled, &op).http_logging);
    assert!(RequestSettings::resolve_with_http_logger(&enabled, &op, None).http_logging);
    assert!(!RequestSettings::resolve_with_http_logger(&enabled, &op, Some(false)).http_logging);
}

#[test]
fn test_settings_serialize_to_json() {
    let settings = RequestSettings::resolve(
        &ClientConfig::default(),
        &operation(json!({"verify": false, "timeout": 30, "retries": 3})),
    );
    let value = serde_json::to_value(&settings).unwrap();

    assert_eq!(value["verify"], json!(false));
    assert_eq!(value["timeout_secs"], json!(30));
    assert_eq!(value["retry"]["retries"], json!(3));
    assert_eq!(value["redirects"]["max_redirects"], json!(30));
}
