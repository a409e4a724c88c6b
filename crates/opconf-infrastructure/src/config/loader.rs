//! Configuration loader
//!
//! Handles loading the client configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::ClientConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use opconf_domain::ProxyMap;
use opconf_domain::error::{Error, Result};
use opconf_domain::normalize_proxies;
use std::env;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Search the default locations when no path is set
    search_defaults: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            search_defaults: true,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip the default file locations when no path is set
    pub fn without_default_search(mut self) -> Self {
        self.search_defaults = false;
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `ClientConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `OPCONF__CONNECTION__TIMEOUT_SECS`)
    pub fn load(&self) -> Result<ClientConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(ClientConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if self.search_defaults {
            if let Some(default_path) = Self::find_default_config_path() {
                figment = figment.merge(Toml::file(&default_path));
                log_config_loaded(&default_path, true);
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let mut config: ClientConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        validate_client_config(&mut config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &ClientConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the client configuration, normalizing proxy keys in place
///
/// Field ranges are checked by the `validator` derives; proxies and the
/// client certificate follow the same rules as operation options.
pub fn validate_client_config(config: &mut ClientConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| Error::config_with_source("Invalid client configuration", e))?;

    if let Some(cert) = &config.connection.cert {
        cert.validate("connection.cert")?;
    }

    let proxies: ProxyMap = normalize_proxies("proxies.proxies", &config.proxies.proxies)?;
    config.proxies.proxies = proxies;

    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set connection configuration
    pub fn with_connection(mut self, connection: crate::config::ConnectionConfig) -> Self {
        self.config.connection = connection;
        self
    }

    /// Set redirect configuration
    pub fn with_redirect(mut self, redirect: crate::config::RedirectConfig) -> Self {
        self.config.redirect = redirect;
        self
    }

    /// Add a proxy for a scheme
    pub fn with_proxy<S: Into<String>, U: Into<String>>(mut self, scheme: S, url: U) -> Self {
        self.config.proxies.add(scheme, url);
        self
    }

    /// Set environment proxy usage
    pub fn with_env_proxies(mut self, use_env_settings: bool) -> Self {
        self.config.proxies.use_env_settings = use_env_settings;
        self
    }

    /// Set retry configuration
    pub fn with_retry(mut self, retry: crate::config::RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    /// Add a header sent with every request
    pub fn with_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    /// Append a token to the user agent
    pub fn with_user_agent(mut self, value: &str) -> Self {
        self.config.add_user_agent(value);
        self
    }

    /// Enable or disable request/response logging
    pub fn with_http_logger(mut self, enabled: bool) -> Self {
        self.config.enable_http_logger = enabled;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let mut config = self.config;
        validate_client_config(&mut config)?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
