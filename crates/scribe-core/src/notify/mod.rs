//! Platform-native desktop notification dispatch.
//!
//! Every user-visible condition in the tracker — sync failures, start/stop
//! feedback, tracking errors — surfaces as a single-line notification here.
//! Best-effort: failures are logged but never propagate.

pub mod backends;
pub mod errors;
pub mod registry;
pub mod traits;

pub use errors::NotifyError;
pub use traits::NotificationBackend;

use tracing::{info, warn};

/// Title used for every notification the tracker sends.
pub const NOTIFICATION_TITLE: &str = "scribe";

/// Send a platform-native desktop notification (best-effort).
///
/// Dispatches to the first available [`NotificationBackend`] via the
/// registry. Failures are logged at warn level but never returned as errors.
pub fn send_notification(message: &str) {
    info!(event = "core.notify.send_started", message = message);

    match registry::send_via_backend(NOTIFICATION_TITLE, message) {
        Ok(true) => {
            info!(event = "core.notify.send_completed");
        }
        Ok(false) => {
            // No backend available — already logged at debug in registry
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                message = message,
                error = %e,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_notification_never_panics() {
        send_notification("Failed to push logs: network unreachable");
    }
}
