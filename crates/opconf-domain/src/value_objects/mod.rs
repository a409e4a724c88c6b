//! Domain Value Objects
//!
//! Immutable value objects describing how a single operation is configured.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`OperationConfig`] | Validated per-operation options |
//! | [`OptionKey`] | One of the fixed set of option names |
//! | [`UnknownOptionPolicy`] | Handling of names outside that set |
//! | [`CertSource`] | Client certificate file(s) |
//! | [`ProxyMap`] | Scheme to proxy URL mapping |

/// Client certificate value objects
pub mod cert;
/// Operation configuration and its builder
pub mod operation;
/// Option names and unknown-option policy
pub mod options;
/// Proxy mapping rules
pub mod proxies;

// Re-export commonly used value objects
pub use cert::CertSource;
pub use operation::{OperationConfig, OperationConfigBuilder};
pub use options::{OptionKey, UnknownOptionPolicy};
pub use proxies::{ProxyMap, normalize_proxies, proxies_from_value};
