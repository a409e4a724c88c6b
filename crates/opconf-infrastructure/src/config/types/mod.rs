//! Configuration types module

pub mod app;
pub mod connection;
pub mod logging;
pub mod proxies;
pub mod redirect;
pub mod retry;

// Re-export main types
pub use app::*;
pub use connection::ConnectionConfig;
pub use logging::LoggingConfig;
pub use proxies::ProxiesConfig;
pub use redirect::RedirectConfig;
pub use retry::RetryConfig;
