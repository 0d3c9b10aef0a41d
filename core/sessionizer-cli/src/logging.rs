//! Tracing setup for the CLI.
//!
//! Diagnostics go to stderr: stdout is reserved for the fzf pipe and
//! must stay clean. `--verbose` lowers the default filter to debug;
//! `RUST_LOG` overrides either default.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
