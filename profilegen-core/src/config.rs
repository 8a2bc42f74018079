//! Configuration for vocabulary sources

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the published schema.org release tree
pub const DEFAULT_BASE_URL: &str = "https://schema.org";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for fetching vocabulary snapshots.
///
/// The defaults point at the public schema.org release tree; tests and
/// mirrors override `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL the release index and documents are resolved against
    pub base_url: String,

    /// Request timeout for one fetch
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with release fetches
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("profilegen/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
