//! scribe-core: Core library for periodic edit-activity tracking
//!
//! This library provides the business logic for observing file edits in a
//! workspace, summarizing them into interval reports, and syncing the
//! accumulated logs to a remote git repository.
//!
//! # Main Entry Points
//!
//! - [`scheduler`] - Start, stop, and reconfigure tracking sessions
//! - [`observer`] - Edit-event accumulation and workspace watching
//! - [`diff`] - Line diffs against per-file snapshots
//! - [`sync`] - Staging, committing, and force-pushing the logs tree
//! - [`forge`] - Remote repository bootstrap and credentials
//! - [`state`] - Persisted key-value state surviving restarts

pub mod diff;
pub mod forge;
pub mod logging;
pub mod logstore;
pub mod notify;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod summary;
pub mod sync;

// Re-export the primary API surface
pub use diff::DiffCounts;
pub use logging::init_logging;
pub use observer::{ChangeObserver, EditAccumulator};
pub use scheduler::{
    SessionConfig, StartOutcome, StopOutcome, Tracker, TrackerSession,
};
pub use state::PersistedState;
pub use summary::NO_ACTIVITY_SENTINEL;
pub use sync::SyncOutcome;
