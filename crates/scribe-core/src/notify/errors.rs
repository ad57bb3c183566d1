//! Notification error types.

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Notification failed: {message}")]
    SendFailed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found() {
        let error = NotifyError::ToolNotFound {
            tool: "notify-send".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Notification tool not found: notify-send"
        );
    }

    #[test]
    fn test_send_failed() {
        let error = NotifyError::SendFailed {
            message: "osascript exited with code 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Notification failed: osascript exited with code 1"
        );
    }
}
