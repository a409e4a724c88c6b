//! Effective request settings
//!
//! Merges the client-wide [`ClientConfig`] with one operation's
//! [`OperationConfig`] into the immutable record handed to the transport.
//! Every option the operation supplied wins; everything else comes from the
//! client configuration.
//!
//! Request/response logging has no operation option of its own, so a
//! per-call override is passed to [`RequestSettings::resolve_with_http_logger`].

use crate::config::ClientConfig;
use crate::constants::USER_AGENT_HEADER;
use opconf_domain::{CertSource, OperationConfig, ProxyMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// Settings for a single request, after merging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSettings {
    /// Verify the server's TLS certificate
    pub verify: bool,
    /// Client certificate
    pub cert: Option<CertSource>,
    /// Timeout in seconds
    pub timeout_secs: u64,
    /// Redirect handling
    pub redirects: RedirectSettings,
    /// Proxy selection inputs
    pub proxies: ProxySettings,
    /// Retry bounds
    pub retry: RetrySettings,
    /// Headers sent with the request, `User-Agent` included
    pub headers: BTreeMap<String, String>,
    /// Block size for streamed downloads in bytes
    pub data_block_size: usize,
    /// Log the request and its response
    pub http_logging: bool,
}

impl RequestSettings {
    /// Merge client defaults with an operation's options
    pub fn resolve(client: &ClientConfig, operation: &OperationConfig) -> Self {
        Self::resolve_with_http_logger(client, operation, None)
    }

    /// Like [`RequestSettings::resolve`], with an optional per-call override of
    /// the client's `enable_http_logger`
    pub fn resolve_with_http_logger(
        client: &ClientConfig,
        operation: &OperationConfig,
        enable_http_logger: Option<bool>,
    ) -> Self {
        let settings = Self {
            verify: operation
                .verify_override()
                .unwrap_or(client.connection.verify),
            cert: operation
                .cert()
                .or(client.connection.cert.as_ref())
                .cloned(),
            timeout_secs: operation
                .timeout()
                .unwrap_or(client.connection.timeout_secs),
            redirects: RedirectSettings {
                allow: operation.allow_redirects().unwrap_or(client.redirect.allow),
                max_redirects: operation
                    .max_redirects()
                    .unwrap_or(client.redirect.max_redirects),
            },
            proxies: ProxySettings {
                proxies: operation
                    .proxies_override()
                    .unwrap_or(&client.proxies.proxies)
                    .clone(),
                use_env_settings: operation
                    .use_env_proxies()
                    .unwrap_or(client.proxies.use_env_settings),
            },
            retry: RetrySettings {
                retries: operation
                    .retries_override()
                    .unwrap_or(client.retry.retries),
                backoff_factor: client.retry.backoff_factor,
                max_backoff_secs: client.retry.max_backoff_secs,
            },
            headers: request_headers(client),
            data_block_size: client.connection.data_block_size,
            http_logging: enable_http_logger.unwrap_or(client.enable_http_logger),
        };
        settings.log_configuration();
        settings
    }

    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn log_configuration(&self) {
        debug!(
            timeout_secs = self.timeout_secs,
            verify = self.verify,
            cert = ?self.cert,
            http_logging = self.http_logging,
            "Configuring request"
        );
        debug!(
            allow = self.redirects.allow,
            max = self.redirects.max_redirects,
            "Configuring redirects"
        );
        debug!(
            proxies = ?self.proxies.proxies,
            use_env_settings = self.proxies.use_env_settings,
            "Configuring proxies"
        );
        debug!(
            retries = self.retry.retries,
            backoff_factor = self.retry.backoff_factor,
            max_backoff_secs = self.retry.max_backoff_secs,
            "Configuring retry"
        );
    }
}

/// Client headers with the user agent applied
///
/// The configured user agent replaces any `User-Agent` entry in `headers`,
/// whatever its case.
fn request_headers(client: &ClientConfig) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = client
        .headers
        .iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case(USER_AGENT_HEADER))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    headers.insert(USER_AGENT_HEADER.to_string(), client.user_agent.clone());
    headers
}

/// Redirect handling for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectSettings {
    /// Follow redirects
    pub allow: bool,
    /// Redirect limit, meaningful only while `allow` is set
    pub max_redirects: u32,
}

impl RedirectSettings {
    /// Redirect limit, or `None` when redirects are not followed
    pub fn limit(&self) -> Option<u32> {
        self.allow.then_some(self.max_redirects)
    }

    /// Whether a redirect response may be followed
    ///
    /// 301 and 302 are only followed for GET and HEAD, so a redirected POST is
    /// never silently replayed as another method.
    pub fn permits(&self, status: u16, method: &str) -> bool {
        if !self.allow {
            return false;
        }
        if matches!(status, 301 | 302) {
            return method.eq_ignore_ascii_case("GET") || method.eq_ignore_ascii_case("HEAD");
        }
        true
    }
}

/// Proxy selection inputs for a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    /// Explicit proxies
    pub proxies: ProxyMap,
    /// Fall back to proxy settings from the environment
    pub use_env_settings: bool,
}

/// Where the proxy for a request comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxySource<'a> {
    /// An explicit proxy URL
    Explicit(&'a str),
    /// Whatever the environment specifies
    Environment,
    /// No proxy
    Direct,
}

impl ProxySettings {
    /// Pick the proxy source for a request to `scheme` (and optionally `host`)
    ///
    /// Explicit entries take precedence over the environment, most specific
    /// first: `scheme://host`, `scheme`, `all://host`, `all`.
    pub fn source_for(&self, scheme: &str, host: Option<&str>) -> ProxySource<'_> {
        let scheme = scheme.to_ascii_lowercase();
        let host = host.map(str::to_ascii_lowercase);

        let mut candidates = Vec::with_capacity(4);
        if let Some(host) = &host {
            candidates.push(format!("{scheme}://{host}"));
        }
        candidates.push(scheme.clone());
        if let Some(host) = &host {
            candidates.push(format!("all://{host}"));
        }
        candidates.push("all".to_string());

        candidates
            .iter()
            .find_map(|key| self.proxies.get(key))
            .map_or(
                if self.use_env_settings {
                    ProxySource::Environment
                } else {
                    ProxySource::Direct
                },
                |url| ProxySource::Explicit(url.as_str()),
            )
    }
}

/// Retry bounds for a request
///
/// `retries` applies to the total, connect and read retry counts alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Number of retries
    pub retries: u32,
    /// Backoff growth factor
    pub backoff_factor: f64,
    /// Upper bound for a single backoff delay in seconds
    pub max_backoff_secs: u64,
}
