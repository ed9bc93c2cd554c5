//! Palmera configuration system.
//!
//! Provides TOML-based configuration for the booking-assistant client.
//! All config sections use sensible defaults so partial configs work
//! out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::PalmeraConfig;
pub use toml_loader::{load_default, load_from_path};

use palmera_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// file if none exists, and validates the result.
pub fn load_config() -> Result<PalmeraConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
