//! # opconf
//!
//! Validates the per-operation options of an HTTP client and resolves them
//! against client-wide defaults.
//!
//! ## Example
//!
//! ```
//! use opconf::{ClientConfig, OperationConfig, RequestSettings, UnknownOptionPolicy};
//! use serde_json::json;
//!
//! let options = json!({"verify": false, "timeout": 30, "retries": 3});
//! let operation = OperationConfig::from_value(&options, UnknownOptionPolicy::Reject).unwrap();
//! let settings = RequestSettings::resolve(&ClientConfig::default(), &operation);
//!
//! assert!(!settings.verify);
//! assert_eq!(settings.timeout_secs, 30);
//! assert_eq!(settings.redirects.max_redirects, 30);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - option schema, value objects and errors
//! - `infrastructure` - client configuration, request settings, logging
//! - `commands` - the operations behind the `opconf` binary

/// Domain layer - option schema and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use opconf_domain::*;
}

/// Infrastructure layer - configuration, settings and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use opconf_infrastructure::*;
}

pub mod commands;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export configuration and settings types
pub use infrastructure::{ClientConfig, ConfigBuilder, ConfigLoader, RequestSettings};
