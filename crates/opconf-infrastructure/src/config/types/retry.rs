//! Retry configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Retry configuration
///
/// `retries` bounds the total, connect and read retries alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RetryConfig {
    /// Number of retries
    pub retries: u32,

    /// Factor by which the backoff delay grows between attempts
    #[validate(range(min = 0.0))]
    pub backoff_factor: f64,

    /// Upper bound for a single backoff delay in seconds
    pub max_backoff_secs: u64,
}

/// Returns default retry configuration with:
/// - no retries, matching the operation option default
/// - 0.8 backoff factor capped at 90 seconds
impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: opconf_domain::constants::DEFAULT_RETRIES,
            backoff_factor: RETRY_DEFAULT_BACKOFF_FACTOR,
            max_backoff_secs: RETRY_DEFAULT_MAX_BACKOFF_SECS,
        }
    }
}
