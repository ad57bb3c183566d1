//! Line-level diffing against per-file snapshots.
//!
//! Each tracked file is compared to its snapshot from the previous interval,
//! and the snapshot is refreshed so the next interval diffs against this one.

pub mod engine;
pub mod lines;

pub use engine::{DiffCounts, diff_against_snapshot};
pub use lines::{LineDiff, count_changed_lines};
