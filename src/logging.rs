//! Diagnostics go to stderr through `tracing`; stdout is left for `--report`.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only.
    Quiet,
    /// One `writing <path>` line per rewritten file.
    Normal,
    /// `RUST_LOG` if set, `debug` otherwise.
    Verbose,
}

fn filter_for(verbosity: Verbosity) -> EnvFilter {
    match verbosity {
        Verbosity::Quiet => EnvFilter::new("warn"),
        Verbosity::Normal => EnvFilter::new("info"),
        Verbosity::Verbose => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        }
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: Verbosity) {
    let verbose = verbosity == Verbosity::Verbose;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .without_time()
        .with_level(verbose)
        .with_target(verbose)
        .try_init();
}
