//! Edit-event observation for a tracked workspace.
//!
//! The watcher turns filesystem notifications into per-file edit events; the
//! accumulator counts them between interval flushes.

pub mod accumulator;
pub mod errors;
pub mod watcher;

pub use accumulator::EditAccumulator;
pub use errors::ObserverError;
pub use watcher::ChangeObserver;
