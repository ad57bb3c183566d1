//! Logging initialization for all scribe binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Emits JSON events to stderr so structured logs never interleave with
/// user-facing stdout output. `RUST_LOG` overrides the default level;
/// `quiet` drops the default from `info` to `warn`.
///
/// Safe to call more than once — subsequent calls are no-ops.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}
