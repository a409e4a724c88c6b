//! Connection configuration types

use crate::constants::*;
use opconf_domain::CertSource;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Verify the server's TLS certificate
    pub verify: bool,

    /// Client certificate presented to the server
    pub cert: Option<CertSource>,

    /// Block size for streamed downloads in bytes
    #[validate(range(min = 1))]
    pub data_block_size: usize,
}

/// Returns default connection configuration with:
/// - 100 second timeout
/// - TLS verification on, no client certificate
/// - 4KB download blocks
impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: CONNECTION_DEFAULT_TIMEOUT_SECS,
            verify: opconf_domain::constants::DEFAULT_VERIFY,
            cert: None,
            data_block_size: CONNECTION_DATA_BLOCK_SIZE,
        }
    }
}
