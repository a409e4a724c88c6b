//! # Domain Layer
//!
//! Operation option schema for opconf: the fixed set of per-operation options,
//! their validation rules and the error taxonomy raised when a caller supplies
//! something invalid.
//!
//! ## Example
//!
//! ```
//! use opconf_domain::{OperationConfig, UnknownOptionPolicy};
//! use serde_json::json;
//!
//! let options = json!({"verify": false, "timeout": 30, "retries": 3});
//! let config = OperationConfig::from_value(&options, UnknownOptionPolicy::Reject).unwrap();
//!
//! assert!(!config.verify());
//! assert_eq!(config.timeout(), Some(30));
//! assert_eq!(config.retries(), 3);
//! assert!(config.proxies().is_empty());
//! ```

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
