//! Persisted key-value state, surviving process restarts.
//!
//! Holds the cached credential, the remote repository URL from the one-time
//! bootstrap, and the user-selected tracking interval. Written atomically
//! (temp file then rename) so a crash never leaves a half-written file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to parse state file: {message}")]
    ParseError { message: String },

    #[error("IO error accessing state file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

/// Process-wide persisted state, stored as JSON at `~/.scribe/state.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PersistedState {
    /// Bearer token for the remote forge, cached after first acquisition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_access_token: Option<String>,

    /// Clone URL of the log repository, cached after the one-time bootstrap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// User-selected tracking interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_interval_secs: Option<u64>,
}

impl PersistedState {
    /// The tracking interval, if one has been persisted.
    pub fn interval(&self) -> Option<Duration> {
        self.tracker_interval_secs.map(Duration::from_secs)
    }
}

/// Load persisted state from disk.
///
/// A missing file yields the default (empty) state; a corrupt file is an
/// error so a typo'd manual edit never silently resets the installation.
pub fn load_state(path: &Path) -> Result<PersistedState, StateError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PersistedState::default());
        }
        Err(e) => return Err(StateError::IoError { source: e }),
    };

    serde_json::from_str(&content).map_err(|e| StateError::ParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Write persisted state to disk atomically.
///
/// Creates parent directories as needed. Writes to `<path>.tmp` and renames
/// over the target.
pub fn save_state(path: &Path, state: &PersistedState) -> Result<(), StateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(state).map_err(|e| StateError::ParseError {
        message: e.to_string(),
    })?;

    let temp_path = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&temp_path, &json) {
        return Err(StateError::IoError { source: e });
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        if let Err(cleanup_err) = fs::remove_file(&temp_path) {
            warn!(
                event = "core.state.temp_file_cleanup_failed",
                temp_file = %temp_path.display(),
                error = %cleanup_err,
            );
        }
        return Err(StateError::IoError { source: e });
    }

    info!(event = "core.state.save_completed", path = %path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let state = load_state(&dir.path().join("state.json")).unwrap();
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let state = PersistedState {
            github_access_token: Some("ghp_test".to_string()),
            repo_url: Some("https://github.com/user/activity-log.git".to_string()),
            tracker_interval_secs: Some(900),
        };
        save_state(&path, &state).unwrap();

        let loaded = load_state(&path).unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.interval(), Some(Duration::from_secs(900)));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("state.json");
        save_state(&path, &PersistedState::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        save_state(&path, &PersistedState::default()).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();
        let result = load_state(&path);
        assert!(matches!(result, Err(StateError::ParseError { .. })));
    }

    #[test]
    fn test_partial_state_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"repo_url": "https://example.com/r.git"}"#).unwrap();
        let state = load_state(&path).unwrap();
        assert_eq!(state.repo_url.as_deref(), Some("https://example.com/r.git"));
        assert!(state.github_access_token.is_none());
        assert!(state.interval().is_none());
    }
}
