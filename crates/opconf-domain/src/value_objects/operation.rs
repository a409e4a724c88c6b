//! Operation configuration
//!
//! The per-call options that customize a single operation. Options arrive
//! either as a loosely typed mapping (`serde_json::Map`) or through the typed
//! [`OperationConfigBuilder`]; both paths run the same validation and produce
//! the same immutable [`OperationConfig`].
//!
//! Supplied options are kept distinct from defaults so that a client-wide
//! configuration can fill in whatever the operation left out.

use super::cert::{CertSource, json_type_name};
use super::options::{OptionKey, UnknownOptionPolicy};
use super::proxies::{ProxyMap, normalize_proxies, proxies_from_value};
use crate::constants::{DEFAULT_RETRIES, DEFAULT_VERIFY, OPTIONS_ROOT};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

static NO_PROXIES: ProxyMap = ProxyMap::new();

/// Validated options for one operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct OperationConfig {
    verify: Option<bool>,
    cert: Option<CertSource>,
    timeout: Option<u64>,
    allow_redirects: Option<bool>,
    max_redirects: Option<u32>,
    proxies: Option<ProxyMap>,
    use_env_proxies: Option<bool>,
    retries: Option<u32>,
}

impl OperationConfig {
    /// Start building a configuration from typed values
    pub fn builder() -> OperationConfigBuilder {
        OperationConfigBuilder::default()
    }

    /// Parse keyword-style options
    ///
    /// `null` values count as not supplied. Names outside the fixed option set
    /// are handled according to `policy`.
    pub fn from_options(options: &Map<String, Value>, policy: UnknownOptionPolicy) -> Result<Self> {
        let mut config = Self::default();

        for (name, value) in options {
            let key = match name.parse::<OptionKey>() {
                Ok(key) => key,
                Err(err) => match policy {
                    UnknownOptionPolicy::Reject => return Err(err),
                    UnknownOptionPolicy::Ignore => {
                        warn!(option = %name, "Ignoring unknown operation option");
                        continue;
                    }
                },
            };
            if value.is_null() {
                continue;
            }
            config.apply(key, value)?;
        }

        config.log_inert_redirect_limit();
        Ok(config)
    }

    /// Parse options given as any JSON value, which must be a mapping
    pub fn from_value(value: &Value, policy: UnknownOptionPolicy) -> Result<Self> {
        match value {
            Value::Object(options) => Self::from_options(options, policy),
            other => Err(Error::invalid_type(
                OPTIONS_ROOT,
                "mapping of option names to values",
                json_type_name(other),
            )),
        }
    }

    fn apply(&mut self, key: OptionKey, value: &Value) -> Result<()> {
        let name = key.as_str();
        match key {
            OptionKey::Verify => self.verify = Some(expect_bool(name, value)?),
            OptionKey::Cert => self.cert = Some(CertSource::from_value(name, value)?),
            OptionKey::Timeout => self.timeout = Some(expect_non_negative(name, value)?),
            OptionKey::AllowRedirects => self.allow_redirects = Some(expect_bool(name, value)?),
            OptionKey::MaxRedirects => self.max_redirects = Some(expect_count(name, value)?),
            OptionKey::Proxies => self.proxies = Some(proxies_from_value(name, value)?),
            OptionKey::UseEnvProxies => self.use_env_proxies = Some(expect_bool(name, value)?),
            OptionKey::Retries => self.retries = Some(expect_count(name, value)?),
        }
        Ok(())
    }

    fn log_inert_redirect_limit(&self) {
        if let (Some(false), Some(max)) = (self.allow_redirects, self.max_redirects) {
            debug!(
                max_redirects = max,
                "max_redirects has no effect while allow_redirects is false"
            );
        }
    }

    /// The supplied options as a mapping that [`OperationConfig::from_options`] accepts
    pub fn to_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        if let Some(verify) = self.verify {
            options.insert(OptionKey::Verify.to_string(), Value::Bool(verify));
        }
        if let Some(cert) = &self.cert {
            options.insert(OptionKey::Cert.to_string(), cert.to_value());
        }
        if let Some(timeout) = self.timeout {
            options.insert(OptionKey::Timeout.to_string(), Value::from(timeout));
        }
        if let Some(allow) = self.allow_redirects {
            options.insert(OptionKey::AllowRedirects.to_string(), Value::Bool(allow));
        }
        if let Some(max) = self.max_redirects {
            options.insert(OptionKey::MaxRedirects.to_string(), Value::from(max));
        }
        if let Some(proxies) = &self.proxies {
            let entries = proxies
                .iter()
                .map(|(scheme, url)| (scheme.clone(), Value::String(url.clone())))
                .collect();
            options.insert(OptionKey::Proxies.to_string(), Value::Object(entries));
        }
        if let Some(use_env) = self.use_env_proxies {
            options.insert(OptionKey::UseEnvProxies.to_string(), Value::Bool(use_env));
        }
        if let Some(retries) = self.retries {
            options.insert(OptionKey::Retries.to_string(), Value::from(retries));
        }
        options
    }

    /// Whether the caller supplied `key`
    pub fn is_set(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::Verify => self.verify.is_some(),
            OptionKey::Cert => self.cert.is_some(),
            OptionKey::Timeout => self.timeout.is_some(),
            OptionKey::AllowRedirects => self.allow_redirects.is_some(),
            OptionKey::MaxRedirects => self.max_redirects.is_some(),
            OptionKey::Proxies => self.proxies.is_some(),
            OptionKey::UseEnvProxies => self.use_env_proxies.is_some(),
            OptionKey::Retries => self.retries.is_some(),
        }
    }

    /// Names of the supplied options
    pub fn supplied(&self) -> Vec<OptionKey> {
        OptionKey::ALL
            .into_iter()
            .filter(|key| self.is_set(*key))
            .collect()
    }

    /// Verify the server's TLS certificate (default `true`)
    pub fn verify(&self) -> bool {
        self.verify.unwrap_or(DEFAULT_VERIFY)
    }

    /// Client certificate, if any
    pub fn cert(&self) -> Option<&CertSource> {
        self.cert.as_ref()
    }

    /// Timeout in seconds; `None` leaves it to the client
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    /// Redirect toggle; `None` leaves it to the client
    pub fn allow_redirects(&self) -> Option<bool> {
        self.allow_redirects
    }

    /// Redirect limit; `None` leaves it to the client
    pub fn max_redirects(&self) -> Option<u32> {
        self.max_redirects
    }

    /// Explicit proxies (default empty)
    pub fn proxies(&self) -> &ProxyMap {
        self.proxies.as_ref().unwrap_or(&NO_PROXIES)
    }

    /// Environment proxy toggle; `None` leaves it to the client
    pub fn use_env_proxies(&self) -> Option<bool> {
        self.use_env_proxies
    }

    /// Retry count (default `0`)
    pub fn retries(&self) -> u32 {
        self.retries.unwrap_or(DEFAULT_RETRIES)
    }

    /// Supplied verify value, without the default
    pub fn verify_override(&self) -> Option<bool> {
        self.verify
    }

    /// Supplied proxies, without the default
    pub fn proxies_override(&self) -> Option<&ProxyMap> {
        self.proxies.as_ref()
    }

    /// Supplied retry count, without the default
    pub fn retries_override(&self) -> Option<u32> {
        self.retries
    }
}

impl TryFrom<Map<String, Value>> for OperationConfig {
    type Error = Error;

    fn try_from(options: Map<String, Value>) -> Result<Self> {
        Self::from_options(&options, UnknownOptionPolicy::Reject)
    }
}

impl From<OperationConfig> for Map<String, Value> {
    fn from(config: OperationConfig) -> Self {
        config.to_options()
    }
}

/// Typed construction of an [`OperationConfig`]
#[derive(Debug, Clone, Default)]
pub struct OperationConfigBuilder {
    config: OperationConfig,
    proxies: Vec<(String, String)>,
    cert_paths: Option<(String, Option<String>)>,
}

impl OperationConfigBuilder {
    /// Set certificate verification
    pub fn verify(mut self, verify: bool) -> Self {
        self.config.verify = Some(verify);
        self
    }

    /// Use a combined certificate and key file
    pub fn cert<P: Into<String>>(mut self, path: P) -> Self {
        self.cert_paths = Some((path.into(), None));
        self
    }

    /// Use separate certificate and key files
    pub fn cert_pair<C: Into<String>, K: Into<String>>(mut self, cert: C, key: K) -> Self {
        self.cert_paths = Some((cert.into(), Some(key.into())));
        self
    }

    /// Set the timeout in seconds
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.timeout = Some(secs);
        self
    }

    /// Set redirect following
    pub fn allow_redirects(mut self, allow: bool) -> Self {
        self.config.allow_redirects = Some(allow);
        self
    }

    /// Set the redirect limit
    pub fn max_redirects(mut self, max: u32) -> Self {
        self.config.max_redirects = Some(max);
        self
    }

    /// Add a proxy for a scheme (or `scheme://host`)
    pub fn proxy<S: Into<String>, U: Into<String>>(mut self, scheme: S, url: U) -> Self {
        self.proxies.push((scheme.into(), url.into()));
        self
    }

    /// Set environment proxy usage
    pub fn use_env_proxies(mut self, use_env: bool) -> Self {
        self.config.use_env_proxies = Some(use_env);
        self
    }

    /// Set the retry count
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = Some(retries);
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<OperationConfig> {
        let mut config = self.config;
        config.cert = match self.cert_paths {
            Some((cert, None)) => Some(CertSource::single(cert)?),
            Some((cert, Some(key))) => Some(CertSource::pair(cert, key)?),
            None => None,
        };
        if !self.proxies.is_empty() {
            config.proxies = Some(normalize_proxies(
                OptionKey::Proxies.as_str(),
                self.proxies,
            )?);
        }
        config.log_inert_redirect_limit();
        Ok(config)
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::invalid_type(key, "boolean", json_type_name(value)))
}

fn expect_non_negative(key: &str, value: &Value) -> Result<u64> {
    let Value::Number(number) = value else {
        return Err(Error::invalid_type(key, "integer", json_type_name(value)));
    };
    if let Some(n) = number.as_u64() {
        return Ok(n);
    }
    if let Some(negative) = number.as_i64() {
        return Err(Error::invalid_value(
            key,
            format!("must be >= 0, got {negative}"),
        ));
    }
    // serde_json reads `-0` and integers below i64::MIN as floats
    match number.as_f64() {
        Some(f) if f == 0.0 && f.is_sign_negative() => Ok(0),
        Some(f) if f.fract() == 0.0 && f < 0.0 => Err(Error::invalid_value(
            key,
            format!("must be >= 0, got {number}"),
        )),
        _ => Err(Error::invalid_type(key, "integer", "float")),
    }
}

fn expect_count(key: &str, value: &Value) -> Result<u32> {
    let n = expect_non_negative(key, value)?;
    u32::try_from(n)
        .map_err(|_| Error::invalid_value(key, format!("must be <= {}, got {n}", u32::MAX)))
}
