//! Remote forge integration: credentials and the one-time repository
//! bootstrap. Both are external collaborators to the tracking pipeline and
//! are only touched at session start.

pub mod backends;
pub mod errors;
pub mod traits;

pub use backends::GitHubBackend;
pub use errors::ForgeError;
pub use traits::ForgeBackend;

/// Name of the remote repository holding the activity logs.
pub const LOG_REPO_NAME: &str = "activity-log";

/// Description attached to the log repository at creation.
pub const LOG_REPO_DESCRIPTION: &str = "Daily coding activity log, maintained by scribe";

/// Log repositories are private by default.
pub const LOG_REPO_PRIVATE: bool = true;
