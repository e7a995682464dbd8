//! Tracing setup for hosts embedding liftlog.
//!
//! The library only emits `tracing` events. Hosts that have no subscriber of
//! their own can call [`init_tracing`] once at startup.

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level.
#[must_use]
pub fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug,rusqlite=info",
        _ => "trace",
    }
}

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins over `verbose` when set. `quiet` installs nothing. Calling
/// this when a global subscriber already exists is a no-op.
pub fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter_directive(verbose))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
