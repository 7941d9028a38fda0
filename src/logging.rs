//! Logging setup for the `poglot` binary.
//!
//! The library only emits [`tracing`] events; installing a subscriber is left
//! to the host application. The CLI calls [`setup_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// With `verbose` the crate logs at `debug`; otherwise `RUST_LOG` is honoured
/// and falls back to `warn`. Does nothing if a subscriber is already set.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("poglot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
