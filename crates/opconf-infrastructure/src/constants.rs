//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Option names and option defaults are defined in `opconf_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "opconf.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "opconf";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `OPCONF__CONNECTION__TIMEOUT_SECS=30`.
pub const CONFIG_ENV_PREFIX: &str = "OPCONF";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CONNECTION CONSTANTS
// ============================================================================

/// Default request timeout in seconds
pub const CONNECTION_DEFAULT_TIMEOUT_SECS: u64 = 100;

/// Default block size for streamed downloads in bytes
pub const CONNECTION_DATA_BLOCK_SIZE: usize = 4096;

/// Default `User-Agent` header value
pub const DEFAULT_USER_AGENT: &str = concat!("opconf/", env!("CARGO_PKG_VERSION"));

/// Header carrying the user agent
pub const USER_AGENT_HEADER: &str = "User-Agent";

// ============================================================================
// REDIRECT CONSTANTS
// ============================================================================

/// Redirects are followed by default
pub const REDIRECT_DEFAULT_ALLOW: bool = true;

/// Default maximum number of redirects
pub const REDIRECT_DEFAULT_MAX: u32 = 30;

// ============================================================================
// PROXY CONSTANTS
// ============================================================================

/// Proxy settings from the environment are honored by default
pub const PROXY_DEFAULT_USE_ENV: bool = true;

// ============================================================================
// RETRY CONSTANTS
// ============================================================================

/// Default backoff factor between retries
pub const RETRY_DEFAULT_BACKOFF_FACTOR: f64 = 0.8;

/// Default upper bound for a single backoff delay in seconds
pub const RETRY_DEFAULT_MAX_BACKOFF_SECS: u64 = 90;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Request/response logging is off unless enabled
pub const HTTP_LOGGER_DEFAULT_ENABLED: bool = false;

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "OPCONF_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
