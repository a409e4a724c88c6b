//! Proxy mapping rules
//!
//! A proxies mapping goes from a scheme key (`http`, `https`, `all`, ...),
//! optionally scoped to one host as `scheme://host`, to the URL of the proxy
//! server. Keys are normalized to lowercase.

use super::cert::json_type_name;
use crate::constants::{PROXY_KEY_SCHEMES, PROXY_URL_SCHEMES};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Validated scheme to proxy URL mapping
pub type ProxyMap = BTreeMap<String, String>;

/// Parse the JSON form of a proxies option
pub fn proxies_from_value(option: &str, value: &Value) -> Result<ProxyMap> {
    let Value::Object(entries) = value else {
        return Err(Error::invalid_type(
            option,
            "mapping of scheme to proxy URL",
            json_type_name(value),
        ));
    };

    let mut proxies = ProxyMap::new();
    for (scheme_key, url) in entries {
        let Value::String(url) = url else {
            return Err(Error::invalid_type(
                format!("{option}.{scheme_key}"),
                "proxy URL string",
                json_type_name(url),
            ));
        };
        insert_proxy(option, &mut proxies, scheme_key, url)?;
    }
    Ok(proxies)
}

/// Validate and normalize an already typed proxies mapping
pub fn normalize_proxies<I, K, V>(option: &str, entries: I) -> Result<ProxyMap>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut proxies = ProxyMap::new();
    for (scheme_key, url) in entries {
        insert_proxy(option, &mut proxies, scheme_key.as_ref(), url.as_ref())?;
    }
    Ok(proxies)
}

fn insert_proxy(option: &str, proxies: &mut ProxyMap, scheme_key: &str, url: &str) -> Result<()> {
    let normalized = normalize_proxy_key(option, scheme_key)?;
    validate_proxy_url(option, &normalized, url)?;
    if proxies.insert(normalized.clone(), url.to_string()).is_some() {
        return Err(Error::invalid_value(
            option,
            format!("duplicate proxy entry for '{normalized}'"),
        ));
    }
    Ok(())
}

/// Lowercase a proxy key and check its scheme (and optional host)
pub fn normalize_proxy_key(option: &str, scheme_key: &str) -> Result<String> {
    let lowered = scheme_key.trim().to_ascii_lowercase();
    let (scheme, host) = match lowered.split_once("://") {
        Some((scheme, host)) => (scheme, Some(host)),
        None => (lowered.as_str(), None),
    };

    if !PROXY_KEY_SCHEMES.contains(&scheme) {
        return Err(Error::invalid_value(
            option,
            format!(
                "'{scheme_key}' is not a recognized proxy scheme (expected one of: {})",
                PROXY_KEY_SCHEMES.join(", ")
            ),
        ));
    }
    if let Some(host) = host {
        if host.is_empty() || host.contains('/') {
            return Err(Error::invalid_value(
                option,
                format!("'{scheme_key}' must be a scheme or scheme://host"),
            ));
        }
    }
    Ok(lowered)
}

/// Check a proxy server URL
pub fn validate_proxy_url(option: &str, scheme_key: &str, url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| {
        Error::invalid_value(
            option,
            format!("proxy for '{scheme_key}' is not a valid URL ({url}): {e}"),
        )
    })?;
    if !PROXY_URL_SCHEMES.contains(&parsed.scheme()) {
        return Err(Error::invalid_value(
            option,
            format!(
                "proxy for '{scheme_key}' uses unsupported scheme '{}'",
                parsed.scheme()
            ),
        ));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Error::invalid_value(
            option,
            format!("proxy for '{scheme_key}' has no host"),
        ));
    }
    Ok(())
}
