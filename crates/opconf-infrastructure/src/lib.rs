//! # Infrastructure Layer
//!
//! Client-wide configuration, request settings resolution and logging for
//! opconf.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Typed client configuration loaded through figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Request Settings
//! | Module | Description |
//! |--------|-------------|
//! | [`settings`] | Client defaults merged with one operation's options |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod settings;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
pub use settings::{ProxySettings, ProxySource, RedirectSettings, RequestSettings, RetrySettings};
