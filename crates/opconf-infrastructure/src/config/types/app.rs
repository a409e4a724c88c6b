//! Client configuration root

use super::{ConnectionConfig, LoggingConfig, ProxiesConfig, RedirectConfig, RetryConfig};
use crate::constants::{DEFAULT_USER_AGENT, HTTP_LOGGER_DEFAULT_ENABLED};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// Client-wide configuration
///
/// Holds the defaults every operation starts from. An operation's own options
/// override the matching fields for that call only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClientConfig {
    /// `User-Agent` header value
    #[validate(custom(function = "validate_user_agent"))]
    pub user_agent: String,

    /// Log each request and response
    ///
    /// An operation may override this for a single call.
    pub enable_http_logger: bool,

    /// Connection settings
    #[validate(nested)]
    pub connection: ConnectionConfig,

    /// Redirect settings
    pub redirect: RedirectConfig,

    /// Proxy settings
    pub proxies: ProxiesConfig,

    /// Retry settings
    #[validate(nested)]
    pub retry: RetryConfig,

    /// Headers sent with every request
    #[validate(custom(function = "validate_header_names"))]
    pub headers: BTreeMap<String, String>,

    /// Logging settings
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enable_http_logger: HTTP_LOGGER_DEFAULT_ENABLED,
            connection: ConnectionConfig::default(),
            redirect: RedirectConfig::default(),
            proxies: ProxiesConfig::default(),
            retry: RetryConfig::default(),
            headers: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Append `value` to the user agent, separated by a space
    pub fn add_user_agent(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        if self.user_agent.is_empty() {
            self.user_agent = value.to_string();
        } else {
            self.user_agent.push(' ');
            self.user_agent.push_str(value);
        }
    }
}

fn validate_user_agent(user_agent: &str) -> Result<(), ValidationError> {
    if user_agent.trim().is_empty() || user_agent.chars().any(char::is_control) {
        return Err(ValidationError::new("invalid_user_agent"));
    }
    Ok(())
}

fn validate_header_names(headers: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    let valid = headers.keys().all(|name| {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_graphic() && b != b':')
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_header_name"))
    }
}
