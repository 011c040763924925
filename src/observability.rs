//! Structured logging, controlled by `RUST_LOG`.
//!
//! Mirrors the teacher crate's `tracing`/`tracing-subscriber` wiring: one
//! `init_tracing` call at process startup, default level `warn`, writer
//! on stderr so stdout stays clean for the report the CLI prints.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber. Safe to call once per
/// process; calling it twice panics, matching `tracing`'s own contract.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
