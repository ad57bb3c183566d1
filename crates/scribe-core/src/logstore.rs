//! Durable storage for interval reports.
//!
//! Reports land under `logs/<YYYY-MM-DD>/<HH-MM>.txt` (UTC). Logs accumulate
//! indefinitely; there is no retention or rotation policy.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use scribe_paths::ScribePaths;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum LogStoreError {
    #[error("IO error in log store: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

/// Create the three durable roots (logs, snapshots, repo working copy) if
/// they do not exist yet.
pub fn ensure_storage_dirs(paths: &ScribePaths) -> Result<(), LogStoreError> {
    for dir in [paths.logs_dir(), paths.snapshots_dir(), paths.repo_dir()] {
        fs::create_dir_all(&dir)?;
    }
    Ok(())
}

/// Write an interval report under today's date partition.
///
/// Returns the path of the written file. Two ticks within the same minute
/// share a name; the later one silently overwrites.
pub fn write_report(paths: &ScribePaths, report: &str) -> Result<PathBuf, LogStoreError> {
    write_report_at(paths, report, Utc::now())
}

/// Write an interval report using an explicit timestamp. Split out from
/// [`write_report`] so tests control the clock.
pub fn write_report_at(
    paths: &ScribePaths,
    report: &str,
    now: DateTime<Utc>,
) -> Result<PathBuf, LogStoreError> {
    let daily_dir = paths.daily_log_dir(&now.format("%Y-%m-%d").to_string());
    fs::create_dir_all(&daily_dir)?;

    let log_path = daily_dir.join(format!("{}.txt", now.format("%H-%M")));
    fs::write(&log_path, report)?;

    info!(
        event = "core.logstore.report_written",
        path = %log_path.display(),
        bytes = report.len(),
    );
    Ok(log_path)
}
