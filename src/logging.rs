use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable overriding the log filter, e.g. `ZEROLOCK_LOG=zerolock=trace`.
pub const LOG_ENV: &str = "ZEROLOCK_LOG";

/// Initialises tracing. Logs go to stderr, stdout carries the reports only.
pub fn init(verbosity: u8) -> Result<()> {
    let default_directive = format!("zerolock={}", level_for(verbosity));
    let format_filter =
        EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(default_directive))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(format_filter);

    tracing_subscriber::Registry::default()
        .with(format_layer)
        .try_init()?;
    Ok(())
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
