//! Option names and the unknown-option policy

use crate::constants::*;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed set of operation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    /// TLS certificate verification
    Verify,
    /// Client certificate
    Cert,
    /// Request timeout in seconds
    Timeout,
    /// Redirect following toggle
    AllowRedirects,
    /// Redirect limit
    MaxRedirects,
    /// Scheme to proxy mapping
    Proxies,
    /// Environment proxy toggle
    UseEnvProxies,
    /// Retry count
    Retries,
}

impl OptionKey {
    /// Every supported option, in documentation order
    pub const ALL: [OptionKey; 8] = [
        OptionKey::Verify,
        OptionKey::Cert,
        OptionKey::Timeout,
        OptionKey::AllowRedirects,
        OptionKey::MaxRedirects,
        OptionKey::Proxies,
        OptionKey::UseEnvProxies,
        OptionKey::Retries,
    ];

    /// The option name as supplied by callers
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verify => OPTION_VERIFY,
            Self::Cert => OPTION_CERT,
            Self::Timeout => OPTION_TIMEOUT,
            Self::AllowRedirects => OPTION_ALLOW_REDIRECTS,
            Self::MaxRedirects => OPTION_MAX_REDIRECTS,
            Self::Proxies => OPTION_PROXIES,
            Self::UseEnvProxies => OPTION_USE_ENV_PROXIES,
            Self::Retries => OPTION_RETRIES,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_option(s))
    }
}

/// What to do with option names outside the fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownOptionPolicy {
    /// Fail with [`Error::UnknownOption`]
    #[default]
    Reject,
    /// Drop the option and log a warning
    Ignore,
}
