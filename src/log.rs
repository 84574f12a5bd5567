// src/log.rs
// Subscriber setup for the binary. Library code only emits `tracing` events.

use tracing_subscriber::{fmt, EnvFilter};

/// stderr, filtered by `RUST_LOG` (default `warn`). `verbose` forces debug
/// for this crate regardless of the environment.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,ecourts_scrape=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
