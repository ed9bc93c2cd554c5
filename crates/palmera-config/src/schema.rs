//! Configuration schema types for Palmera.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Root configuration for the Palmera client.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PalmeraConfig {
    pub backend: BackendSection,
    pub chat: ChatSection,
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    /// Base URL of the resort backend; the chat endpoint path is appended.
    pub base_url: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall request timeout in seconds. The original client had none
    /// and could hang in "sending" forever.
    pub request_timeout_secs: u64,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

/// Chat behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSection {
    /// Assistant message the session opens with.
    pub greeting: String,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            greeting: "Hello! I am your resort booking assistant. When do you want to stay?"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = PalmeraConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.backend.connect_timeout_secs, 10);
        assert_eq!(config.backend.request_timeout_secs, 120);
        assert!(config.chat.greeting.contains("resort booking assistant"));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: PalmeraConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8080");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: PalmeraConfig = toml::from_str(
            r#"
[backend]
base_url = "https://resort.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://resort.example.com");
        assert_eq!(config.backend.connect_timeout_secs, 10);
    }
}
