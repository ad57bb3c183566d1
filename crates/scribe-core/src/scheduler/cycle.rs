//! One full tracking cycle: summarize, persist, sync, reset.

use scribe_paths::ScribePaths;
use tracing::{error, info};

use crate::observer::EditAccumulator;
use crate::scheduler::session::SessionConfig;
use crate::sync::SyncOutcome;
use crate::{logstore, notify, summary, sync};

/// Run one cycle against the current accumulator.
///
/// A log-write failure keeps the accumulator so the interval's activity
/// rolls into the next tick. A sync failure clears it — the log file is
/// already durable locally and the next sync attempt will carry it.
pub(super) fn run_cycle(
    paths: &ScribePaths,
    config: &SessionConfig,
    accumulator: &mut EditAccumulator,
) {
    info!(
        event = "core.scheduler.cycle_started",
        files = accumulator.len(),
    );

    let report = summary::build_summary(paths, &config.workspace_root, accumulator);

    let log_path = match logstore::write_report(paths, &report) {
        Ok(path) => path,
        Err(e) => {
            error!(event = "core.scheduler.log_write_failed", error = %e);
            notify::send_notification(&format!("Activity tracking error: {}", e));
            return;
        }
    };

    match sync::sync_logs(paths, &config.repo_url, &config.token) {
        Ok(SyncOutcome::Pushed) => {
            info!(
                event = "core.scheduler.cycle_synced",
                log = %log_path.display(),
            );
        }
        Ok(SyncOutcome::NoChanges) => {
            info!(event = "core.scheduler.cycle_no_changes");
        }
        Err(e) => {
            error!(event = "core.scheduler.sync_failed", error = %e);
            notify::send_notification(&format!("Failed to push logs: {}", e));
        }
    }

    accumulator.clear();
    info!(event = "core.scheduler.cycle_completed");
}
