//! Log subscriber setup for the binary

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter for a `-v` count
#[must_use]
pub const fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is
/// harmless; the second subscriber is dropped.
pub fn init_tracing(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
