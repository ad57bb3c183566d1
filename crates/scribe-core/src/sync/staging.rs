//! Recursive copy of the logs root into the repo working copy.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::errors::SyncError;

/// Recursively copy `source` into `dest`, overwriting existing files.
///
/// Files present at the destination but absent from the source are left in
/// place — the logs tree only ever grows, so a merge-by-overwrite is enough.
/// Returns the number of files copied.
pub fn copy_tree_overwrite(source: &Path, dest: &Path) -> Result<usize, SyncError> {
    let mut copied = 0;

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| SyncError::StageFailed {
            message: e.to_string(),
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| SyncError::StageFailed {
                message: e.to_string(),
            })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    debug!(
        event = "core.sync.staging_completed",
        source = %source.display(),
        dest = %dest.display(),
        files = copied,
    );
    Ok(copied)
}
