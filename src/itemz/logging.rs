//! Structured logging via `tracing`.
//!
//! Logs go to stderr so they never mix with command output. The level comes
//! from the `-v` count only; the environment is not consulted.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::new(format!("itemz={}", level_for(verbosity)));

    let _ = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbosity > 1)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init();
}
