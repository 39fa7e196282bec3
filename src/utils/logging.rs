//! Diagnostic logging setup.
//!
//! User-facing status lines go through `ui::messages`; this only wires the
//! `tracing` diagnostics (row auto-removal, reconciliation counts) to stderr.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialize tracing. `RUST_LOG` wins over the verbosity flag when set.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level_for(verbose)
        ))
    });

    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init();

    debug!("huskyhours started with verbosity level: {}", verbose);
}
