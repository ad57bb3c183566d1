use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.scribe/` directory layout.
///
/// Single source of truth for every path under `~/.scribe/`. Use `resolve()`
/// in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct ScribePaths {
    scribe_dir: PathBuf,
}

impl ScribePaths {
    /// Resolve paths from the user's home directory (`~/.scribe`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            scribe_dir: home.join(".scribe"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(scribe_dir: PathBuf) -> Self {
        Self { scribe_dir }
    }

    /// The base `~/.scribe` directory.
    pub fn scribe_dir(&self) -> &Path {
        &self.scribe_dir
    }

    // --- Top-level subdirectories ---

    /// Interval reports, partitioned by UTC date.
    pub fn logs_dir(&self) -> PathBuf {
        self.scribe_dir.join("logs")
    }

    /// Diff baselines, one file per tracked basename.
    pub fn snapshots_dir(&self) -> PathBuf {
        self.scribe_dir.join("snapshots")
    }

    /// Local working copy of the remote log repository.
    pub fn repo_dir(&self) -> PathBuf {
        self.scribe_dir.join("repo")
    }

    // --- Top-level files ---

    pub fn state_file(&self) -> PathBuf {
        self.scribe_dir.join("state.json")
    }

    pub fn user_config(&self) -> PathBuf {
        self.scribe_dir.join("config.toml")
    }

    // --- Parameterized paths ---

    /// Daily log subdirectory for a `YYYY-MM-DD` date string.
    pub fn daily_log_dir(&self, date: &str) -> PathBuf {
        self.logs_dir().join(date)
    }

    /// Snapshot file for a tracked file, keyed by basename.
    ///
    /// Two tracked files sharing a basename in different directories share
    /// a snapshot. Known limitation, kept for on-disk compatibility.
    pub fn snapshot_file(&self, basename: &str) -> PathBuf {
        self.snapshots_dir().join(basename)
    }

    /// The `logs/` subtree inside the repo working copy.
    pub fn repo_logs_dir(&self) -> PathBuf {
        self.repo_dir().join("logs")
    }

    /// The git lock artifact a crashed run can leave behind.
    pub fn repo_lock_file(&self) -> PathBuf {
        self.repo_dir().join(".git").join("index.lock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paths() -> ScribePaths {
        ScribePaths::from_dir(PathBuf::from("/home/user/.scribe"))
    }

    #[test]
    fn test_resolve_returns_ok_when_home_set() {
        // HOME is set in CI and dev environments
        let result = ScribePaths::resolve();
        assert!(result.is_ok());
        let paths = result.unwrap();
        assert!(paths.scribe_dir().to_string_lossy().contains(".scribe"));
    }

    #[test]
    fn test_from_dir() {
        let paths = ScribePaths::from_dir(PathBuf::from("/tmp/test-scribe"));
        assert_eq!(paths.scribe_dir(), Path::new("/tmp/test-scribe"));
    }

    #[test]
    fn test_logs_dir() {
        assert_eq!(
            test_paths().logs_dir(),
            PathBuf::from("/home/user/.scribe/logs")
        );
    }

    #[test]
    fn test_snapshots_dir() {
        assert_eq!(
            test_paths().snapshots_dir(),
            PathBuf::from("/home/user/.scribe/snapshots")
        );
    }

    #[test]
    fn test_repo_dir() {
        assert_eq!(
            test_paths().repo_dir(),
            PathBuf::from("/home/user/.scribe/repo")
        );
    }

    #[test]
    fn test_state_file() {
        assert_eq!(
            test_paths().state_file(),
            PathBuf::from("/home/user/.scribe/state.json")
        );
    }

    #[test]
    fn test_user_config() {
        assert_eq!(
            test_paths().user_config(),
            PathBuf::from("/home/user/.scribe/config.toml")
        );
    }

    #[test]
    fn test_daily_log_dir() {
        assert_eq!(
            test_paths().daily_log_dir("2026-08-06"),
            PathBuf::from("/home/user/.scribe/logs/2026-08-06")
        );
    }

    #[test]
    fn test_snapshot_file() {
        assert_eq!(
            test_paths().snapshot_file("main.rs"),
            PathBuf::from("/home/user/.scribe/snapshots/main.rs")
        );
    }

    #[test]
    fn test_repo_logs_dir() {
        assert_eq!(
            test_paths().repo_logs_dir(),
            PathBuf::from("/home/user/.scribe/repo/logs")
        );
    }

    #[test]
    fn test_repo_lock_file() {
        assert_eq!(
            test_paths().repo_lock_file(),
            PathBuf::from("/home/user/.scribe/repo/.git/index.lock")
        );
    }

    #[test]
    fn test_path_error_message() {
        let err = PathError::HomeNotFound;
        let msg = err.to_string();
        assert!(msg.contains("home directory not found"));
        assert!(msg.contains("$HOME"));
    }
}
