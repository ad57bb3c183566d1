//! Snapshot-backed diff computation for tracked files.

use std::fs;
use std::path::Path;

use scribe_paths::ScribePaths;
use tracing::{debug, warn};

use crate::diff::lines::count_changed_lines;

/// Added/removed line counts for one file over one interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffCounts {
    pub added: usize,
    pub removed: usize,
}

/// Diff a file against its snapshot and refresh the snapshot.
///
/// The snapshot is keyed by basename, so two tracked files sharing a name in
/// different directories share one baseline. Known limitation, kept for
/// on-disk compatibility.
///
/// With no prior snapshot the whole current content counts as added. Any
/// read or write failure is logged and degrades to zero counts — a single
/// file never aborts the cycle.
pub fn diff_against_snapshot(paths: &ScribePaths, file_path: &Path) -> DiffCounts {
    let current = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                event = "core.diff.read_failed",
                path = %file_path.display(),
                error = %e,
            );
            return DiffCounts::default();
        }
    };

    let Some(basename) = file_path.file_name().and_then(|n| n.to_str()) else {
        warn!(
            event = "core.diff.basename_missing",
            path = %file_path.display(),
        );
        return DiffCounts::default();
    };

    let snapshot_path = paths.snapshot_file(basename);
    let previous = match fs::read_to_string(&snapshot_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            warn!(
                event = "core.diff.snapshot_read_failed",
                path = %snapshot_path.display(),
                error = %e,
            );
            return DiffCounts::default();
        }
    };

    let line_diff = count_changed_lines(&previous, &current);

    // Refresh unconditionally so the next interval diffs against this one,
    // not against the session start.
    if let Err(e) = fs::create_dir_all(paths.snapshots_dir())
        .and_then(|_| fs::write(&snapshot_path, &current))
    {
        warn!(
            event = "core.diff.snapshot_write_failed",
            path = %snapshot_path.display(),
            error = %e,
        );
        return DiffCounts::default();
    }

    debug!(
        event = "core.diff.completed",
        path = %file_path.display(),
        added = line_diff.added,
        removed = line_diff.removed,
    );

    DiffCounts {
        added: line_diff.added,
        removed: line_diff.removed,
    }
}
