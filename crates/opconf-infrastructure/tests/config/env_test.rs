//! Environment variable override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p opconf-infrastructure --test integration env_test -- --test-threads=1 --ignored
//! ```

use opconf_infrastructure::config::ConfigLoader;
use std::env;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_defaults() {
    set_env("OPCONF_ENV_A__CONNECTION__TIMEOUT_SECS", "12");
    set_env("OPCONF_ENV_A__REDIRECT__ALLOW", "false");

    let config = ConfigLoader::new()
        .with_env_prefix("OPCONF_ENV_A")
        .without_default_search()
        .load()
        .expect("Should load config");

    assert_eq!(config.connection.timeout_secs, 12);
    assert!(!config.redirect.allow);

    remove_env("OPCONF_ENV_A__CONNECTION__TIMEOUT_SECS");
    remove_env("OPCONF_ENV_A__REDIRECT__ALLOW");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = crate::test_helpers::temp_dir();
    let path = dir.path().join("opconf.toml");
    std::fs::write(&path, "[retry]\nretries = 2\n").unwrap();
    set_env("OPCONF_ENV_B__RETRY__RETRIES", "9");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("OPCONF_ENV_B")
        .load()
        .expect("Should load config");

    assert_eq!(config.retry.retries, 9);

    remove_env("OPCONF_ENV_B__RETRY__RETRIES");
}
