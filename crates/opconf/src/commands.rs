//! Operations behind the `opconf` binary
//!
//! Each command returns its output instead of printing it so the binary
//! stays a thin shell over this module.

use opconf_domain::error::{Error, Result};
use opconf_domain::{OperationConfig, OptionKey, UnknownOptionPolicy};
use opconf_infrastructure::config::{ClientConfig, ConfigLoader};
use opconf_infrastructure::error_ext::ErrorContext;
use opconf_infrastructure::settings::RequestSettings;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read options from an argument, or from stdin when the argument is `-`
pub fn read_options_input(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .io_context("Failed to read options from stdin")?;
    Ok(input)
}

/// Parse options JSON into a validated operation configuration
pub fn parse_options(input: &str, policy: UnknownOptionPolicy) -> Result<OperationConfig> {
    let value: Value = serde_json::from_str(input)?;
    OperationConfig::from_value(&value, policy)
}

/// Validate options and return all eight fields, defaults filled in
///
/// Options left to the client are reported as `null`.
pub fn check(input: &str, policy: UnknownOptionPolicy) -> Result<Value> {
    let config = parse_options(input, policy)?;
    Ok(Value::Object(options_record(&config)))
}

fn options_record(config: &OperationConfig) -> Map<String, Value> {
    let proxies: Map<String, Value> = config
        .proxies()
        .iter()
        .map(|(scheme, url)| (scheme.clone(), Value::String(url.clone())))
        .collect();

    let mut record = Map::new();
    for key in OptionKey::ALL {
        let value = match key {
            OptionKey::Verify => Value::Bool(config.verify()),
            OptionKey::Cert => config.cert().map_or(Value::Null, |cert| cert.to_value()),
            OptionKey::Timeout => config.timeout().map_or(Value::Null, Value::from),
            OptionKey::AllowRedirects => config.allow_redirects().map_or(Value::Null, Value::Bool),
            OptionKey::MaxRedirects => config.max_redirects().map_or(Value::Null, Value::from),
            OptionKey::Proxies => Value::Object(proxies.clone()),
            OptionKey::UseEnvProxies => config.use_env_proxies().map_or(Value::Null, Value::Bool),
            OptionKey::Retries => Value::from(config.retries()),
        };
        record.insert(key.to_string(), value);
    }
    record
}

/// Load the client configuration, from `config_path` if given
pub fn load_client_config(config_path: Option<&Path>) -> Result<ClientConfig> {
    match config_path {
        Some(path) if !path.exists() => Err(Error::config(format!(
            "Configuration file not found: {}",
            path.display()
        ))),
        Some(path) => ConfigLoader::new().with_config_path(path).load(),
        None => ConfigLoader::new().load(),
    }
}

/// Validate options and merge them with the client configuration
///
/// `http_logger` overrides the client's `enable_http_logger` for this call.
pub fn resolve(
    input: &str,
    config_path: Option<&Path>,
    policy: UnknownOptionPolicy,
    http_logger: Option<bool>,
) -> Result<Value> {
    let operation = parse_options(input, policy)?;
    let client = load_client_config(config_path)?;
    let settings = RequestSettings::resolve_with_http_logger(&client, &operation, http_logger);
    Ok(serde_json::to_value(settings)?)
}

/// Write the default client configuration, refusing to overwrite
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::invalid_argument(format!(
            "{} already exists",
            path.display()
        )));
    }
    ConfigLoader::new().save_to_file(&ClientConfig::default(), path)?;
    info!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Render the loaded client configuration as TOML
pub fn show_config(config_path: Option<&Path>) -> Result<String> {
    let config = load_client_config(config_path)?;
    toml::to_string_pretty(&config).context("Failed to serialize config to TOML")
}
