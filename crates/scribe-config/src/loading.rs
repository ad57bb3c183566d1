//! Configuration loading logic.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.scribe/config.toml`
//! 3. **CLI arguments** - Command-line flags (applied by the CLI layer)

use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::types::ScribeConfig;
use crate::validation::validate_config;

/// Load configuration from the user config file, falling back to defaults.
///
/// A missing config file is not an error; a parse or validation failure is.
pub fn load_user_config() -> Result<ScribeConfig, ConfigError> {
    let paths = scribe_paths::ScribePaths::resolve().map_err(|e| {
        ConfigError::InvalidConfiguration {
            message: e.to_string(),
        }
    })?;
    load_config_file(&paths.user_config())
}

/// Load and validate a configuration file from the given path.
///
/// Returns defaults when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<ScribeConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = ScribeConfig::default();
            validate_config(&config)?;
            return Ok(config);
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config: ScribeConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    validate_config(&config)?;
    Ok(config)
}
