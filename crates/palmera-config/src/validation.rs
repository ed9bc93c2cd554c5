//! Configuration validation, collecting all errors into one `ConfigError`.

use crate::schema::PalmeraConfig;
use palmera_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PalmeraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let url = config.backend.base_url.trim();
    if url.is_empty() {
        errors.push("backend.base_url must not be empty".into());
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(format!(
            "backend.base_url must start with http:// or https:// (got '{url}')"
        ));
    }

    if config.backend.connect_timeout_secs == 0 {
        errors.push("backend.connect_timeout_secs must be at least 1".into());
    }
    if config.backend.request_timeout_secs == 0 {
        errors.push("backend.request_timeout_secs must be at least 1".into());
    }

    if config.chat.greeting.trim().is_empty() {
        errors.push("chat.greeting must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
