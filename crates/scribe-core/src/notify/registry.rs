//! Notification registry for managing and looking up notification backends.

use std::sync::LazyLock;

use tracing::debug;

use super::backends::{LinuxNotificationBackend, MacOsNotificationBackend};
use super::traits::NotificationBackend;

/// Global registry of all supported notification backends.
static REGISTRY: LazyLock<NotificationRegistry> = LazyLock::new(NotificationRegistry::new);

/// Registry that manages all notification backend implementations.
struct NotificationRegistry {
    backends: Vec<Box<dyn NotificationBackend>>,
}

impl NotificationRegistry {
    fn new() -> Self {
        Self {
            backends: vec![
                Box::new(MacOsNotificationBackend),
                Box::new(LinuxNotificationBackend),
            ],
        }
    }

    /// Detect the first available notification backend.
    ///
    /// Registration order in `new()` determines priority.
    fn detect(&self) -> Option<&dyn NotificationBackend> {
        self.backends
            .iter()
            .find(|b| b.is_available())
            .map(|b| b.as_ref())
    }
}

/// Send a notification via the first available platform backend.
///
/// Returns `Ok(true)` if the notification was sent, `Ok(false)` if no
/// backend is available (skipped), or `Err` if the backend failed.
pub fn send_via_backend(title: &str, message: &str) -> Result<bool, super::errors::NotifyError> {
    let Some(backend) = REGISTRY.detect() else {
        debug!(
            event = "core.notify.send_skipped",
            reason = "no backend available",
        );
        return Ok(false);
    };

    backend.send(title, message)?;
    Ok(true)
}
