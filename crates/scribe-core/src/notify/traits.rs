//! Notification backend trait definition.

use crate::notify::errors::NotifyError;

/// A platform-specific way of showing a desktop notification.
pub trait NotificationBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "macos", "linux").
    fn name(&self) -> &'static str;

    /// Whether this backend can run on the current system.
    fn is_available(&self) -> bool;

    /// Show a notification with the given title and message.
    fn send(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}
