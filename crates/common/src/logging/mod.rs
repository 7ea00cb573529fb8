//! Logging subsystem.

pub mod manager;
pub mod types;


// Re-export main types and functions
pub use manager::{build_filter, init};
pub use types::{ConsoleConfig, FileLoggingConfig, LoggerConfig};

// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;

/// Formats a service name with an optional label suffix.
pub fn format_service_name(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
