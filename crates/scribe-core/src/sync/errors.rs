#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("git executable not found on PATH")]
    GitUnavailable,

    #[error("Failed to initialize repository: {message}")]
    InitFailed { message: String },

    #[error("Failed to register remote: {message}")]
    RemoteAddFailed { message: String },

    #[error("Failed to query working-tree status: {message}")]
    StatusFailed { message: String },

    #[error("Failed to stage log files: {message}")]
    StageFailed { message: String },

    #[error("Failed to commit logs: {message}")]
    CommitFailed { message: String },

    #[error("Failed to push logs: {message}")]
    PushFailed { message: String },

    #[error("IO error during sync: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_error_display() {
        let error = SyncError::GitUnavailable;
        assert_eq!(error.to_string(), "git executable not found on PATH");

        let error = SyncError::PushFailed {
            message: "remote rejected".to_string(),
        };
        assert_eq!(error.to_string(), "Failed to push logs: remote rejected");
    }
}
