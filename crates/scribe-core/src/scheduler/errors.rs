use crate::logstore::LogStoreError;
use crate::observer::ObserverError;

#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("Failed to subscribe to workspace changes: {source}")]
    ObserverFailed {
        #[from]
        source: ObserverError,
    },

    #[error("Failed to prepare storage directories: {source}")]
    StorageFailed {
        #[from]
        source: LogStoreError,
    },

    #[error("Failed to spawn tracker thread: {source}")]
    SpawnFailed { source: std::io::Error },
}
