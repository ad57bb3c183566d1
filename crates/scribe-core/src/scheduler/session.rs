//! A single tracking session: one watcher subscription, one loop thread.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use scribe_paths::ScribePaths;
use tracing::{error, info};

use crate::logstore;
use crate::observer::{ChangeObserver, EditAccumulator};
use crate::scheduler::cycle;
use crate::scheduler::errors::SchedulerError;

/// Everything a session needs to run cycles.
#[derive(Clone)]
pub struct SessionConfig {
    pub interval: Duration,
    pub workspace_root: PathBuf,
    pub repo_url: String,
    pub token: String,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("interval", &self.interval)
            .field("workspace_root", &self.workspace_root)
            .field("repo_url", &self.repo_url)
            .field("token", &"***")
            .finish()
    }
}

/// Messages consumed by the session loop.
enum SessionMsg {
    Edit(PathBuf),
    Stop,
}

/// An active tracking session.
///
/// Constructed at start and consumed at stop — there is no ambient global
/// state, so two sessions can never share a timer or accumulator. Edit
/// notifications and timer ticks are both handled by one consumer loop, so
/// cycles are serialized by construction: a slow cycle delays the next tick
/// instead of overlapping it.
pub struct TrackerSession {
    config: SessionConfig,
    tx: mpsc::Sender<SessionMsg>,
    handle: thread::JoinHandle<EditAccumulator>,
    _observer: ChangeObserver,
}

impl TrackerSession {
    /// Start a fresh session with an empty accumulator.
    pub fn start(paths: ScribePaths, config: SessionConfig) -> Result<Self, SchedulerError> {
        Self::start_with_activity(paths, config, EditAccumulator::new())
    }

    /// Start a session seeded with activity carried over from a previous
    /// session (interval reconfiguration preserves unflushed edits).
    pub fn start_with_activity(
        paths: ScribePaths,
        config: SessionConfig,
        carried: EditAccumulator,
    ) -> Result<Self, SchedulerError> {
        logstore::ensure_storage_dirs(&paths)?;

        let (tx, rx) = mpsc::channel();
        let edit_tx = tx.clone();
        let observer = ChangeObserver::subscribe(
            &config.workspace_root,
            paths.scribe_dir().to_path_buf(),
            move |path| {
                let _ = edit_tx.send(SessionMsg::Edit(path));
            },
        )?;

        let loop_config = config.clone();
        let handle = thread::Builder::new()
            .name("scribe-tracker".to_string())
            .spawn(move || run_loop(rx, paths, loop_config, carried))
            .map_err(|e| SchedulerError::SpawnFailed { source: e })?;

        info!(
            event = "core.scheduler.session_started",
            interval_secs = config.interval.as_secs(),
            workspace = %config.workspace_root.display(),
        );

        Ok(Self {
            config,
            tx,
            handle,
            _observer: observer,
        })
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Stop the session and return its config plus unflushed activity.
    ///
    /// Safe to call mid-cycle: an in-flight cycle finishes before the loop
    /// observes the stop message, and no new cycle starts afterwards.
    pub fn stop(self) -> (SessionConfig, EditAccumulator) {
        let _ = self.tx.send(SessionMsg::Stop);

        // Release the subscription before joining so no further edits race
        // with the drain.
        drop(self._observer);

        let activity = match self.handle.join() {
            Ok(accumulator) => accumulator,
            Err(_) => {
                error!(event = "core.scheduler.session_thread_panicked");
                EditAccumulator::new()
            }
        };

        info!(
            event = "core.scheduler.session_stopped",
            unflushed_files = activity.len(),
        );
        (self.config, activity)
    }
}

/// The single consumer loop: edits mutate the accumulator, deadline expiry
/// runs a cycle, stop drains out.
fn run_loop(
    rx: Receiver<SessionMsg>,
    paths: ScribePaths,
    config: SessionConfig,
    mut accumulator: EditAccumulator,
) -> EditAccumulator {
    let mut deadline = Instant::now() + config.interval;

    loop {
        let Some(wait) = deadline.checked_duration_since(Instant::now()) else {
            cycle::run_cycle(&paths, &config, &mut accumulator);
            deadline = Instant::now() + config.interval;
            continue;
        };

        match rx.recv_timeout(wait) {
            Ok(SessionMsg::Edit(path)) => accumulator.record(path),
            Ok(SessionMsg::Stop) => break,
            Err(RecvTimeoutError::Timeout) => {
                cycle::run_cycle(&paths, &config, &mut accumulator);
                // Re-arm only after the cycle completes; ticks never overlap.
                deadline = Instant::now() + config.interval;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    accumulator
}
