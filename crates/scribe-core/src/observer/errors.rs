#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    #[error("Failed to watch '{path}': {source}")]
    WatchFailed {
        path: String,
        source: notify::Error,
    },
}
