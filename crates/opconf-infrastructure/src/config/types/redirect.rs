//! Redirect configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Redirect configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Follow redirects
    pub allow: bool,

    /// Maximum number of redirects to follow
    pub max_redirects: u32,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            allow: REDIRECT_DEFAULT_ALLOW,
            max_redirects: REDIRECT_DEFAULT_MAX,
        }
    }
}
