//! # scribe-config
//!
//! TOML configuration types, loading, and validation for scribe.
//!
//! Single source of truth for the `ScribeConfig` type. Depends only on
//! `scribe-paths`.

mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{load_config_file, load_user_config};
pub use types::{DEFAULT_INTERVAL_MINUTES, ScribeConfig, TrackerConfig};
pub use validation::validate_config;

impl ScribeConfig {
    /// Load configuration from `~/.scribe/config.toml`.
    ///
    /// See [`loading::load_user_config`] for details.
    pub fn load() -> Result<Self, ConfigError> {
        loading::load_user_config()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
