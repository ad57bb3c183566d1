//! Configuration types for scribe.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default tracking interval when neither config nor persisted state sets one.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 15;

/// Top-level configuration, loaded from `~/.scribe/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScribeConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// Tracker section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Minutes between sync cycles. Falls back to [`DEFAULT_INTERVAL_MINUTES`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_minutes: Option<u64>,

    /// Workspace directory to track. Falls back to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,
}

impl TrackerConfig {
    /// Resolve the configured interval, falling back to the default.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.unwrap_or(DEFAULT_INTERVAL_MINUTES) * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_default_interval() {
        let config = ScribeConfig::default();
        assert_eq!(
            config.tracker.interval(),
            Duration::from_secs(DEFAULT_INTERVAL_MINUTES * 60)
        );
    }

    #[test]
    fn test_explicit_interval_wins() {
        let tracker = TrackerConfig {
            interval_minutes: Some(60),
            workspace_root: None,
        };
        assert_eq!(tracker.interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_full_config() {
        let config: ScribeConfig = toml::from_str(
            r#"
            [tracker]
            interval_minutes = 30
            workspace_root = "/home/user/project"
            "#,
        )
        .unwrap();
        assert_eq!(config.tracker.interval_minutes, Some(30));
        assert_eq!(
            config.tracker.workspace_root,
            Some(PathBuf::from("/home/user/project"))
        );
    }

    #[test]
    fn test_parse_empty_config() {
        let config: ScribeConfig = toml::from_str("").unwrap();
        assert_eq!(config, ScribeConfig::default());
    }
}
