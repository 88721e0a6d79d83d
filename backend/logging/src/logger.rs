//! Structured Logger
//!
//! Wraps `tracing` to provide stderr output (plain or JSON), an optional
//! daily-rotating NDJSON file, and environment-based level control.

use anyhow::{Context, Result};
use plateproxy_config::{defaults, LogConfig};
use tracing::subscriber::DefaultGuard;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the file writer flushing; drop it only on shutdown.
pub struct LoggerGuard {
    _file: Option<WorkerGuard>,
}

/// `RUST_LOG` wins; otherwise the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Plain subscriber at the default level, for events emitted before the
/// configured logger exists.
pub fn bootstrap_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(build_filter(defaults::LOG_LEVEL))
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .finish()
}

/// Route this thread's events to stderr until the guard drops.
///
/// Covers config loading, which runs before [`init_logger`] can read the
/// log settings.
pub fn bootstrap_logger() -> DefaultGuard {
    tracing::subscriber::set_default(bootstrap_subscriber(std::io::stderr))
}

/// Initialize the global structured logger.
///
/// A second call is a no-op apart from the returned guard.
pub fn init_logger(config: &LogConfig) -> Result<LoggerGuard> {
    let console_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
            .boxed()
    };

    // Rolling file appender: writes NDJSON to `<dir>/plateproxy.log.YYYY-MM-DD`
    let (file_layer, file_guard) = match &config.dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("plateproxy.log")
                .build(dir)
                .with_context(|| format!("Failed to open log directory: {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(console_layer)
        .with(file_layer)
        .try_init();

    Ok(LoggerGuard { _file: file_guard })
}
