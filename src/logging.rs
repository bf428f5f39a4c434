//! Diagnostics for TrainStat
//!
//! Events go to stderr, stdout is reserved for the training summaries. An
//! optional log file receives the same events as JSON lines, rolled daily.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `[logging]` section of the configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// JSON log file, in addition to stderr
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "trainstat=error",
            LogLevel::Warn => "trainstat=warn",
            LogLevel::Info => "trainstat=info",
            LogLevel::Debug => "trainstat=debug",
            LogLevel::Trace => "trainstat=trace",
        }
    }

    /// Level selected by a `-v` count; zero keeps the configured level
    pub fn from_verbosity(verbose: u8, configured: LogLevel) -> Self {
        match verbose {
            0 => configured,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Shape of the stderr output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    #[default]
    Compact,
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.directive()));

    let stderr = fmt::layer().with_writer(io::stderr).with_target(true);
    let stderr = match config.format {
        LogFormat::Pretty => stderr.pretty().boxed(),
        LogFormat::Json => stderr.json().boxed(),
        LogFormat::Compact => stderr.compact().boxed(),
    };

    let file = config.file.as_deref().map(|path| {
        let (dir, name) = split_log_path(path);
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, name))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .try_init()?;

    tracing::debug!(level = ?config.level, format = ?config.format, file = ?config.file, "logging ready");
    Ok(())
}

fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trainstat.log".to_string());
    (dir, name)
}
