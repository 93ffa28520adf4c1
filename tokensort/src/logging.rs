//! Diagnostic logging to stderr.
//!
//! Standard output carries the report and user-facing messages, so log
//! events always go to stderr. Verbosity follows `RUST_LOG` and defaults to
//! warnings only.

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
