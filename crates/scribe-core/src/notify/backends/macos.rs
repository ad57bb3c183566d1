//! macOS notification backend using osascript.

use crate::notify::errors::NotifyError;
use crate::notify::traits::NotificationBackend;

/// macOS notification backend via `osascript` (Notification Center).
pub struct MacOsNotificationBackend;

impl NotificationBackend for MacOsNotificationBackend {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos") && which::which("osascript").is_ok()
    }

    fn send(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let script = format!(
            "display notification \"{}\" with title \"{}\"",
            escape_applescript(message),
            escape_applescript(title)
        );

        let output = std::process::Command::new("osascript")
            .args(["-e", &script])
            .output()
            .map_err(|e| NotifyError::SendFailed {
                message: format!("osascript exec failed: {}", e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(NotifyError::SendFailed {
                message: format!("osascript exit {}: {}", output.status, stderr.trim()),
            })
        }
    }
}

/// Escape a string for embedding in a double-quoted AppleScript literal.
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_backend_name() {
        let backend = MacOsNotificationBackend;
        assert_eq!(backend.name(), "macos");
    }

    #[test]
    fn macos_backend_availability_matches_platform() {
        let backend = MacOsNotificationBackend;
        if !cfg!(target_os = "macos") {
            assert!(!backend.is_available());
        }
    }

    #[test]
    fn test_escape_applescript() {
        assert_eq!(
            escape_applescript(r#"push "failed" \ retry"#),
            r#"push \"failed\" \\ retry"#
        );
    }
}
