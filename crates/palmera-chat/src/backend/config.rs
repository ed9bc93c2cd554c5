//! HTTP backend configuration.

use std::time::Duration;

/// Configuration for [`super::HttpBackend`].
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the resort backend (no trailing path).
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Overall deadline for a chat turn. Without it a hung backend call
    /// would leave the session in "sending" indefinitely.
    pub request_timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
