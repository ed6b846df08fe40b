//! Structured logging setup.
//!
//! Library code only emits `tracing` events; the binary installs a
//! subscriber once at startup with [`init_logging`]. `RUST_LOG` overrides
//! the configured level when set.
//!
//! ```rust,ignore
//! use nodal::observe::{init_logging, LogConfig, LogFormat, LogLevel};
//!
//! init_logging(&LogConfig { level: LogLevel::Debug, format: LogFormat::Compact, ..Default::default() });
//! tracing::debug!(n = 5, "generated point set");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt as tfmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info  => "info",
            LogLevel::Warn  => "warn",
            LogLevel::Error => "error",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info"  => Ok(LogLevel::Info),
            "warn"  => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other   => Err(format!("unknown log level `{other}`")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// human-readable, multi-line
    Pretty,
    /// one line per event
    #[default]
    Compact,
    /// machine-readable
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty"  => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json"    => Ok(LogFormat::Json),
            other     => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Include source location (file:line)
    pub source_location: bool,
    /// Directive string such as `"nodal::interpolation=trace"`; replaces `level`
    pub filter: Option<String>,
}

impl LogConfig {
    fn env_filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level.to_string());
        match &self.filter {
            Some(custom) => EnvFilter::try_new(custom).unwrap_or_else(|_| fallback()),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
        }
    }
}

/// Installs the global subscriber, writing to stderr so it never mixes
/// with interactive output on stdout.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(config: &LogConfig) -> bool {
    let filter = config.env_filter();

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tfmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tfmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tfmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init(),
    };

    result.is_ok()
}
