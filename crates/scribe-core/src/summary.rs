//! Interval report generation.
//!
//! Turns the accumulator's changed-file set into a deterministic textual
//! report, one line per file, diffing each against its snapshot.

use std::path::Path;

use scribe_paths::ScribePaths;
use tracing::info;

use crate::diff;
use crate::observer::EditAccumulator;

/// Report body when no qualifying edit arrived during the interval.
pub const NO_ACTIVITY_SENTINEL: &str = "No activity in this interval.";

/// Build the report for one interval.
///
/// Files are listed in accumulator order with paths relative to the
/// workspace root (absolute when outside it). Files that vanished since
/// their last edit get a marker line instead of counts.
pub fn build_summary(
    paths: &ScribePaths,
    workspace_root: &Path,
    accumulator: &EditAccumulator,
) -> String {
    if accumulator.is_empty() {
        info!(event = "core.summary.no_activity");
        return NO_ACTIVITY_SENTINEL.to_string();
    }

    let lines: Vec<String> = accumulator
        .paths()
        .map(|path| {
            if !path.exists() {
                return format!("File: {} (deleted or not accessible)", path.display());
            }
            let counts = diff::diff_against_snapshot(paths, path);
            let relative = path.strip_prefix(workspace_root).unwrap_or(path);
            format!(
                "File: {}, Changes: +{} -{}",
                relative.display(),
                counts.added,
                counts.removed
            )
        })
        .collect();

    info!(event = "core.summary.built", files = lines.len());
    lines.join("\n")
}
