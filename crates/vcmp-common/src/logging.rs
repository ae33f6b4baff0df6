//! Structured logging bootstrap built on `tracing-subscriber`.

use crate::error::{Result, VcmpError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter used when neither `RUST_LOG` nor a configured level is usable.
pub const DEFAULT_LOG_FILTER: &str = "info,vcmp_bot=debug";

/// Output format of the console/file layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = VcmpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(VcmpError::validation_field(
                format!("unknown log format '{other}' (expected pretty, compact or json)"),
                "logging.format",
            )),
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "vcmp_status=trace").
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Directory for a daily rolling log file. Console only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Pretty,
            directory: None,
        }
    }
}

/// Builds the filter. An explicit `level_override` (the CLI flag) wins, then
/// `RUST_LOG`, then the configured level, then the default.
pub fn build_filter(configured: &str, level_override: Option<&str>) -> EnvFilter {
    level_override
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn format_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    }
}

/// Initialize the global tracing subscriber.
///
/// When a log directory is configured the returned guard must be kept alive
/// for the lifetime of the process, otherwise buffered file output is lost.
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(&config.level, level_override);
    let console = format_layer(config.format, std::io::stdout, true);

    let (file, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "vcmp-bot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(format_layer(config.format, writer, false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| VcmpError::Logging(e.to_string()))?;

    Ok(guard)
}
