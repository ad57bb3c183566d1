//! Scheduling: drives summarize → log → sync cycles on a fixed interval.
//!
//! The [`Tracker`] owns at most one [`TrackerSession`] and guards the
//! start/stop/reconfigure lifecycle; the session runs the cycles.

pub mod cycle;
pub mod errors;
pub mod session;

use std::time::Duration;

use scribe_paths::ScribePaths;
use tracing::info;

use crate::notify;
use crate::observer::EditAccumulator;

pub use errors::SchedulerError;
pub use session::{SessionConfig, TrackerSession};

/// Result of a start request.
#[derive(Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A session was already active; the request was a no-op.
    AlreadyRunning,
}

/// Result of a stop request.
#[derive(Debug, PartialEq, Eq)]
pub enum StopOutcome {
    /// The session stopped; unflushed activity is returned to the caller.
    Stopped(EditAccumulator),
    /// No session was active; the request was a no-op.
    NotRunning,
}

/// Owner of the tracking lifecycle.
pub struct Tracker {
    paths: ScribePaths,
    session: Option<TrackerSession>,
}

impl Tracker {
    pub fn new(paths: ScribePaths) -> Self {
        Self {
            paths,
            session: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// The active session's interval, if one is running.
    pub fn interval(&self) -> Option<Duration> {
        self.session.as_ref().map(TrackerSession::interval)
    }

    /// Start tracking. A second start while active is a no-op with a
    /// notification.
    pub fn start(&mut self, config: SessionConfig) -> Result<StartOutcome, SchedulerError> {
        if self.session.is_some() {
            info!(event = "core.scheduler.start_skipped", reason = "already running");
            notify::send_notification("Tracking is already running.");
            return Ok(StartOutcome::AlreadyRunning);
        }

        let session = TrackerSession::start(self.paths.clone(), config)?;
        self.session = Some(session);
        Ok(StartOutcome::Started)
    }

    /// Stop tracking. Tolerates being called when not running.
    pub fn stop(&mut self) -> StopOutcome {
        match self.session.take() {
            Some(session) => {
                let (_config, activity) = session.stop();
                StopOutcome::Stopped(activity)
            }
            None => {
                info!(event = "core.scheduler.stop_skipped", reason = "not running");
                notify::send_notification("Tracker is not running.");
                StopOutcome::NotRunning
            }
        }
    }

    /// Apply a new interval to a running session: stop-then-start, with
    /// accumulated-but-unflushed activity preserved across the restart.
    ///
    /// Returns `Ok(false)` when no session is active.
    pub fn reconfigure(&mut self, interval: Duration) -> Result<bool, SchedulerError> {
        let Some(session) = self.session.take() else {
            info!(
                event = "core.scheduler.reconfigure_skipped",
                reason = "not running",
            );
            notify::send_notification("Tracker is not running.");
            return Ok(false);
        };

        let (mut config, activity) = session.stop();
        config.interval = interval;

        let session = TrackerSession::start_with_activity(self.paths.clone(), config, activity)?;
        self.session = Some(session);

        info!(
            event = "core.scheduler.reconfigured",
            interval_secs = interval.as_secs(),
        );
        Ok(true)
    }
}
