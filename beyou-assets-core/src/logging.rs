//! Logging - `tracing` events rendered by `tracing-subscriber`
//!
//! The pipeline reports progress through `info!` events, so the console
//! output of a run is whatever this subscriber prints. The level comes from
//! CLI flags only; `RUST_LOG` is not consulted.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub with_target: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            with_target: false,
            with_ansi: false,
        }
    }
}

impl LogConfig {
    /// `-q` drops progress lines, each `-v` adds detail.
    ///
    /// - quiet: warn
    /// - 0: info (progress)
    /// - 1: debug (paths, sizes, digests)
    /// - 2+: trace
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            LevelFilter::WARN
        } else {
            match verbose {
                0 => LevelFilter::INFO,
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Self {
            level,
            // module paths only help once debug detail is on
            with_target: verbose > 0 && !quiet,
            ..Default::default()
        }
    }
}

/// Install the global subscriber, printing to stdout.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    init_logging_with_writer(config, io::stdout)
}

/// Install the global subscriber with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(
    config: &LogConfig,
    writer: W,
) -> Result<(), tracing_subscriber::util::TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .without_time()
        .with_level(config.level > LevelFilter::INFO)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi);

    tracing_subscriber::registry()
        .with(config.level)
        .with(layer)
        .try_init()
}
