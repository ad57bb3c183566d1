//! Configuration validation logic.

use crate::errors::ConfigError;
use crate::types::ScribeConfig;

/// Validate a ScribeConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - The tracking interval, if set, must be positive
/// - The workspace root, if set, must be an absolute path
pub fn validate_config(config: &ScribeConfig) -> Result<(), ConfigError> {
    if let Some(minutes) = config.tracker.interval_minutes
        && minutes == 0
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "tracker.interval_minutes must be positive".to_string(),
        });
    }

    if let Some(ref root) = config.tracker.workspace_root
        && !root.is_absolute()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "tracker.workspace_root must be an absolute path, got '{}'",
                root.display()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrackerConfig;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ScribeConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = ScribeConfig {
            tracker: TrackerConfig {
                interval_minutes: Some(0),
                workspace_root: None,
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("positive"));
    }

    #[test]
    fn test_relative_workspace_root_rejected() {
        let config = ScribeConfig {
            tracker: TrackerConfig {
                interval_minutes: None,
                workspace_root: Some(PathBuf::from("relative/dir")),
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("absolute"));
    }

    #[test]
    fn test_absolute_workspace_root_accepted() {
        let config = ScribeConfig {
            tracker: TrackerConfig {
                interval_minutes: Some(15),
                workspace_root: Some(PathBuf::from("/home/user/project")),
            },
        };
        assert!(validate_config(&config).is_ok());
    }
}
