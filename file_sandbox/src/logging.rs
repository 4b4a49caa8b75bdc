//! # Logging Initialization
//!
//! Sets up the `tracing` subscriber for binaries and tests that embed the
//! file tools. Verbosity follows `RUST_LOG` when set, otherwise the level
//! passed by the caller. Output goes to stderr so tool results on stdout
//! stay clean.
//!
//! A `std::sync::Once` guard makes repeated calls harmless; the first call
//! wins.

use std::io::stderr;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Initializes logging for tests at debug verbosity.
pub fn init_test_logging() {
    init_logging("debug");
}

/// Initializes the global tracing subscriber.
///
/// `default_level` is used when `RUST_LOG` is not set (e.g. `"info"` or
/// `"debug,file_sandbox=trace"`).
pub fn init_logging(default_level: &str) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(stderr).with_ansi(true))
            .init();
    });
}
