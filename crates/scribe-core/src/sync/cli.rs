//! Centralized git CLI wrappers for the sync engine.
//!
//! All version-control operations go through these narrow synchronous
//! functions with captured exit status, so the rest of the engine never
//! depends on a specific process-invocation mechanism. Remote URLs may embed
//! a credential; stderr is redacted before it reaches logs or errors.

use std::path::Path;

use tracing::{info, warn};

use super::errors::SyncError;
use super::redact_credentials;

/// Initialize an empty repository with the given initial branch.
pub fn init(dir: &Path, branch: &str) -> Result<(), SyncError> {
    info!(event = "core.sync.git_init_started", path = %dir.display());

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["init", "-b", branch])
        .output()
        .map_err(|e| SyncError::InitFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if output.status.success() {
        info!(event = "core.sync.git_init_completed", path = %dir.display());
        Ok(())
    } else {
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));
        warn!(event = "core.sync.git_init_failed", stderr = %stderr.trim());
        Err(SyncError::InitFailed {
            message: stderr.trim().to_string(),
        })
    }
}

/// Register `origin` pointing at the (credential-embedded) remote URL.
pub fn remote_add_origin(dir: &Path, url: &str) -> Result<(), SyncError> {
    info!(event = "core.sync.remote_add_started", path = %dir.display());

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["remote", "add", "origin", url])
        .output()
        .map_err(|e| SyncError::RemoteAddFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if output.status.success() {
        info!(event = "core.sync.remote_add_completed", path = %dir.display());
        Ok(())
    } else {
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));
        warn!(event = "core.sync.remote_add_failed", stderr = %stderr.trim());
        Err(SyncError::RemoteAddFailed {
            message: stderr.trim().to_string(),
        })
    }
}

/// Query working-tree status in porcelain format.
///
/// Empty output means there is nothing to commit.
pub fn status_porcelain(dir: &Path) -> Result<String, SyncError> {
    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["status", "--porcelain"])
        .output()
        .map_err(|e| SyncError::StatusFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));
        warn!(event = "core.sync.status_failed", stderr = %stderr.trim());
        Err(SyncError::StatusFailed {
            message: stderr.trim().to_string(),
        })
    }
}

/// Stage every change in the working tree.
pub fn add_all(dir: &Path) -> Result<(), SyncError> {
    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["add", "-A"])
        .output()
        .map_err(|e| SyncError::CommitFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));
        warn!(event = "core.sync.add_failed", stderr = %stderr.trim());
        Err(SyncError::CommitFailed {
            message: stderr.trim().to_string(),
        })
    }
}

/// Create a commit with the given message.
pub fn commit(dir: &Path, message: &str) -> Result<(), SyncError> {
    info!(event = "core.sync.commit_started", path = %dir.display());

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["commit", "-m", message])
        .output()
        .map_err(|e| SyncError::CommitFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if output.status.success() {
        info!(event = "core.sync.commit_completed", path = %dir.display());
        Ok(())
    } else {
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));
        warn!(event = "core.sync.commit_failed", stderr = %stderr.trim());
        Err(SyncError::CommitFailed {
            message: stderr.trim().to_string(),
        })
    }
}

/// Force-push the branch to `origin`, overwriting remote history.
///
/// The force is deliberate: one installation owns one log repository, so
/// the remote never has commits the local working copy lacks on purpose.
pub fn push_force(dir: &Path, branch: &str) -> Result<(), SyncError> {
    info!(
        event = "core.sync.push_started",
        path = %dir.display(),
        branch = branch,
    );

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["push", "--set-upstream", "origin", branch, "--force"])
        .output()
        .map_err(|e| SyncError::PushFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if output.status.success() {
        info!(event = "core.sync.push_completed", branch = branch);
        Ok(())
    } else {
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));
        warn!(
            event = "core.sync.push_failed",
            branch = branch,
            stderr = %stderr.trim(),
        );
        Err(SyncError::PushFailed {
            message: stderr.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_git_metadata() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), "master").unwrap();
        assert!(dir.path().join(".git").exists());
    }

    #[test]
    fn test_init_invalid_path_fails() {
        let result = init(Path::new("/nonexistent/path"), "master");
        assert!(result.is_err());
    }

    #[test]
    fn test_remote_add_and_status() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), "master").unwrap();
        remote_add_origin(dir.path(), "https://example.com/repo.git").unwrap();

        // Fresh repo with no files: nothing to report.
        assert_eq!(status_porcelain(dir.path()).unwrap(), "");

        std::fs::write(dir.path().join("file.txt"), "hello").unwrap();
        let status = status_porcelain(dir.path()).unwrap();
        assert!(status.contains("file.txt"));
    }

    #[test]
    fn test_remote_add_twice_fails() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), "master").unwrap();
        remote_add_origin(dir.path(), "https://example.com/repo.git").unwrap();
        let result = remote_add_origin(dir.path(), "https://example.com/other.git");
        assert!(matches!(result, Err(SyncError::RemoteAddFailed { .. })));
    }

    #[test]
    fn test_commit_without_identity_reports_error_not_panic() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), "master").unwrap();
        // Nothing staged: commit fails either way, but must come back as a
        // SyncError rather than a panic.
        let result = commit(dir.path(), "empty");
        assert!(result.is_err());
    }

    #[test]
    fn test_push_without_remote_fails() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), "master").unwrap();
        let result = push_force(dir.path(), "master");
        assert!(matches!(result, Err(SyncError::PushFailed { .. })));
    }
}
