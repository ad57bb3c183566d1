//! Workspace file watcher feeding the edit accumulator.
//!
//! Follows the channel-based watcher pattern: the notify callback thread
//! only filters events and forwards qualifying paths; all state lives with
//! the consumer.

use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info};

use crate::observer::errors::ObserverError;

/// One subscription to filesystem change notifications for a workspace.
///
/// Exactly one observer exists per active tracking session; dropping it
/// releases the subscription.
pub struct ChangeObserver {
    /// Underlying notify watcher. Must be kept alive.
    _watcher: RecommendedWatcher,
}

impl ChangeObserver {
    /// Subscribe to edit events under `workspace_root` (recursive).
    ///
    /// `on_edit` is invoked once per qualifying notification with the edited
    /// file's path. Events under `storage_root` are ignored so the tracker
    /// never observes its own logs, snapshots, or working copy.
    pub fn subscribe(
        workspace_root: &Path,
        storage_root: PathBuf,
        on_edit: impl Fn(PathBuf) + Send + 'static,
    ) -> Result<Self, ObserverError> {
        let mut watcher = notify::recommended_watcher(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !is_edit_kind(&event.kind) {
                        return;
                    }
                    for path in event.paths {
                        if is_tracked_file(&path, &storage_root) {
                            debug!(
                                event = "core.observer.edit_detected",
                                path = %path.display(),
                            );
                            on_edit(path);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(event = "core.observer.event_error", error = %e);
                }
            },
        )
        .map_err(|e| ObserverError::WatchFailed {
            path: workspace_root.display().to_string(),
            source: e,
        })?;

        watcher
            .watch(workspace_root, RecursiveMode::Recursive)
            .map_err(|e| ObserverError::WatchFailed {
                path: workspace_root.display().to_string(),
                source: e,
            })?;

        info!(
            event = "core.observer.subscribed",
            path = %workspace_root.display(),
        );

        Ok(Self { _watcher: watcher })
    }
}

/// Whether an event kind represents a content edit.
///
/// Creations and data modifications qualify; access, metadata-only, rename,
/// and removal events do not.
fn is_edit_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(notify::event::CreateKind::File)
            | EventKind::Modify(notify::event::ModifyKind::Data(_))
            | EventKind::Modify(notify::event::ModifyKind::Any)
    )
}

/// Whether a notified path is a real file the tracker should count.
///
/// Paths that do not resolve to a regular file (directories, removed
/// entries, special files) are skipped, as is anything under the storage
/// root.
fn is_tracked_file(path: &Path, storage_root: &Path) -> bool {
    path.is_file() && !path.starts_with(storage_root)
}
