//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
///
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when it is set and parses.
/// Installing twice is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
