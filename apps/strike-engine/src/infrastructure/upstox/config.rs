//! Upstox adapter configuration.

use std::time::Duration;

/// Default base URL for the Upstox v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.upstox.com/v2";

/// Configuration for the Upstox chain adapter.
#[derive(Debug, Clone)]
pub struct UpstoxConfig {
    /// API base URL.
    pub base_url: String,
    /// Bearer token for the market-data API.
    pub access_token: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl UpstoxConfig {
    /// Create a new configuration with the default base URL.
    #[must_use]
    pub fn new(access_token: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token,
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the base URL (used by tests against a local mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
