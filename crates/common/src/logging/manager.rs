//! Logging initialization.

use std::io;

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    Layer,
};

use super::types::LoggerConfig;

/// Builds the level filter: `RUST_LOG` if set, otherwise `default_level`.
pub fn build_filter(default_level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy()
}

/// Initializes the logging subsystem with the provided config.
///
/// Must be called at most once per process.
pub fn init(config: LoggerConfig) {
    let filt = build_filter(config.default_level);

    // Console logs go to stderr, stdout is reserved for command output.
    let console_sub = if config.console_config.json_format {
        layer()
            .json()
            .with_writer(io::stderr)
            .with_span_events(config.console_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(io::stderr)
            .with_span_events(config.console_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    // Build optional file logging layer
    let file_layer = config.file_logging_config.as_ref().map(|file_config| {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );

        if file_config.json_format {
            layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(file_appender)
                .with_ansi(false) // No color codes in files
                .with_filter(filt.clone())
                .boxed()
        }
    });

    tracing_subscriber::registry()
        .with(console_sub)
        .with(file_layer)
        .init();

    debug!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );
}
