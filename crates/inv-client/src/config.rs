//! Configuration types for the backend client.

use std::time::Duration;

/// Default backend location for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`crate::InventarisClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether proxy settings from the environment are honored.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_system_proxy(mut self, enable: bool) -> Self {
        self.use_system_proxy = enable;
        self
    }
}
