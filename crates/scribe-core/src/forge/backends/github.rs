//! GitHub forge backend implementation.
//!
//! Uses the `gh` CLI so the tracker inherits the user's existing GitHub
//! authentication with zero auth code of its own.

use tracing::{debug, info, warn};

use crate::forge::errors::ForgeError;
use crate::forge::traits::ForgeBackend;

/// GitHub forge backend using the `gh` CLI.
pub struct GitHubBackend;

impl ForgeBackend for GitHubBackend {
    fn name(&self) -> &'static str {
        "github"
    }

    fn display_name(&self) -> &'static str {
        "GitHub"
    }

    fn is_available(&self) -> bool {
        which::which("gh").is_ok()
    }

    fn auth_token(&self) -> Result<String, ForgeError> {
        if !self.is_available() {
            return Err(ForgeError::CliUnavailable {
                tool: "gh".to_string(),
            });
        }

        debug!(event = "core.forge.auth_token_started");

        let output = std::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .map_err(ForgeError::from)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(event = "core.forge.auth_token_failed", stderr = %stderr.trim());
            return Err(ForgeError::AuthFailed {
                message: format!(
                    "gh auth token failed (exit {}): {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            });
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(ForgeError::AuthFailed {
                message: "gh auth token returned an empty token".to_string(),
            });
        }

        info!(event = "core.forge.auth_token_completed");
        Ok(token)
    }

    fn create_repository(
        &self,
        token: &str,
        name: &str,
        description: &str,
        private: bool,
    ) -> Result<String, ForgeError> {
        if !self.is_available() {
            return Err(ForgeError::CliUnavailable {
                tool: "gh".to_string(),
            });
        }

        info!(
            event = "core.forge.create_repository_started",
            name = name,
            private = private,
        );

        let output = std::process::Command::new("gh")
            .env("GH_TOKEN", token)
            .args(["api", "user/repos"])
            .arg("-f")
            .arg(format!("name={}", name))
            .arg("-f")
            .arg(format!("description={}", description))
            .arg("-F")
            .arg(format!("private={}", private))
            .args(["-F", "auto_init=true", "--jq", ".clone_url"])
            .output()
            .map_err(ForgeError::from)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.forge.create_repository_failed",
                name = name,
                stderr = %stderr.trim(),
            );
            return Err(ForgeError::CreateFailed {
                message: format!(
                    "gh api user/repos failed (exit {}): {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            });
        }

        let clone_url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if clone_url.is_empty() {
            return Err(ForgeError::CreateFailed {
                message: "repository created but no clone URL returned".to_string(),
            });
        }

        info!(
            event = "core.forge.create_repository_completed",
            name = name,
        );
        Ok(clone_url)
    }
}
