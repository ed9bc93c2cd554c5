//! HTTP client struct and endpoint resolution.

use super::config::BackendConfig;

pub(crate) const CHAT_ENDPOINT: &str = "/api/chat/message";

/// Client for the resort chat endpoint.
pub struct HttpBackend {
    pub(crate) config: BackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    /// Full URL of the chat endpoint.
    pub(crate) fn endpoint_url(&self) -> String {
        format!(
            "{}{CHAT_ENDPOINT}",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base() {
        let backend = HttpBackend::new(BackendConfig::new("http://localhost:8080"));
        assert_eq!(
            backend.endpoint_url(),
            "http://localhost:8080/api/chat/message"
        );
    }

    #[test]
    fn endpoint_url_strips_trailing_slash() {
        let backend = HttpBackend::new(BackendConfig::new("https://resort.example.com/"));
        assert_eq!(
            backend.endpoint_url(),
            "https://resort.example.com/api/chat/message"
        );
    }
}
