//! Client configuration
//!
//! Typed client-wide defaults and the figment based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_client_config};
pub use types::*;
