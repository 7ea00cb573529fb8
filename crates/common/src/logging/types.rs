//! Configuration types for the logging subsystem.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::format::FmtSpan;

/// Configuration for the console logging layer.
///
/// Console logs go to stderr so that command output on stdout stays clean.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Use JSON format instead of compact format
    pub json_format: bool,
    /// Span events to log (ENTER, EXIT, CLOSE, etc.)
    pub fmt_span: FmtSpan,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            fmt_span: FmtSpan::NONE,
        }
    }
}

/// Configuration for file-based logging with rotation
#[derive(Debug, Clone)]
pub struct FileLoggingConfig {
    /// Directory where log files will be written
    pub directory: PathBuf,
    /// Base filename prefix (e.g., "msig" -> "msig.log")
    pub file_name_prefix: String,
    /// Rotation strategy (daily, hourly, never)
    pub rotation: Rotation,
    /// Use JSON format for file logs (default: false, uses compact)
    pub json_format: bool,
}

impl FileLoggingConfig {
    /// Creates a daily-rotated compact file config
    pub fn new(directory: PathBuf, file_name_prefix: String) -> Self {
        Self {
            directory,
            file_name_prefix,
            rotation: Rotation::DAILY,
            json_format: false,
        }
    }

    /// Set the rotation strategy
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Enable JSON file logging
    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }
}

/// Main logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Name reported in the startup line
    pub service_name: String,
    /// Level used when `RUST_LOG` is not set
    pub default_level: Level,
    /// Console logging configuration
    pub console_config: ConsoleConfig,
    /// File logging configuration (optional)
    pub file_logging_config: Option<FileLoggingConfig>,
}

impl LoggerConfig {
    /// Creates a new configuration with service name
    pub fn new(service_name: String) -> Self {
        Self {
            service_name,
            default_level: Level::INFO,
            console_config: ConsoleConfig::default(),
            file_logging_config: None,
        }
    }

    /// Set the default level
    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Enable JSON console logging
    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.console_config.json_format = enabled;
        self
    }

    /// Set span events
    pub fn with_fmt_span(mut self, fmt_span: FmtSpan) -> Self {
        self.console_config.fmt_span = fmt_span;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, config: FileLoggingConfig) -> Self {
        self.file_logging_config = Some(config);
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new("(msig)".to_string())
    }
}
