//! Domain layer constants
//!
//! Option names and the value rules shared by operation options and the
//! client configuration. Infrastructure defaults live in
//! `opconf_infrastructure::constants`.

// ============================================================================
// OPTION NAMES
// ============================================================================

/// TLS certificate verification toggle
pub const OPTION_VERIFY: &str = "verify";

/// Client certificate path
pub const OPTION_CERT: &str = "cert";

/// Request timeout in seconds
pub const OPTION_TIMEOUT: &str = "timeout";

/// Redirect following toggle
pub const OPTION_ALLOW_REDIRECTS: &str = "allow_redirects";

/// Maximum number of redirects to follow
pub const OPTION_MAX_REDIRECTS: &str = "max_redirects";

/// Scheme to proxy URL mapping
pub const OPTION_PROXIES: &str = "proxies";

/// Whether proxy settings may be taken from the environment
pub const OPTION_USE_ENV_PROXIES: &str = "use_env_proxies";

/// Number of retries for the operation
pub const OPTION_RETRIES: &str = "retries";

/// Pseudo option name used when the whole options value is malformed
pub const OPTIONS_ROOT: &str = "<options>";

// ============================================================================
// OPTION DEFAULTS
// ============================================================================

/// Certificate verification is on unless disabled
pub const DEFAULT_VERIFY: bool = true;

/// Operations do not retry unless asked to
pub const DEFAULT_RETRIES: u32 = 0;

// ============================================================================
// PROXY RULES
// ============================================================================

/// Schemes accepted as keys of a proxies mapping
///
/// `all` applies to every scheme without a more specific entry.
pub const PROXY_KEY_SCHEMES: &[&str] = &[
    "http", "https", "ws", "wss", "socks4", "socks4a", "socks5", "socks5h", "all",
];

/// Schemes a proxy server URL may use
pub const PROXY_URL_SCHEMES: &[&str] = &["http", "https", "socks4", "socks4a", "socks5", "socks5h"];

/// Wildcard proxy key
pub const PROXY_KEY_ALL: &str = "all";
