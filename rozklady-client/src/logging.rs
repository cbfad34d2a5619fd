//! Logging setup for binaries built on the rozklady crates
//!
//! The library crates only emit `tracing` events. This module installs a
//! subscriber for applications that want them printed.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No output
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `ROZKLADY_LOG_LEVEL`: Override log filter (error, warn, info, debug, trace,
///   or a full directive such as `rozklady_parser=trace`)
/// - `RUST_LOG`: Used when `ROZKLADY_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => init_with_filter(create_env_filter("info")?, false),
        LoggingMode::Debug => init_with_filter(create_env_filter("debug")?, true),
    }
}

/// Initialize compact stderr logging with an explicit default level.
///
/// Environment overrides still take precedence.
pub fn init_logging_with_level(default_level: &str) -> Result<(), LoggingError> {
    init_with_filter(create_env_filter(default_level)?, false)
}

/// Initialize logging from environment variables
///
/// Reads `ROZKLADY_LOG_MODE` ("silent", "development", "debug").
/// Defaults to Silent mode if not specified or invalid.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("ROZKLADY_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };

    init_logging(mode)
}

fn init_with_filter(filter: EnvFilter, verbose: bool) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_thread_ids(verbose)
        .with_file(verbose)
        .with_line_number(verbose);

    let result = if verbose {
        Registry::default().with(layer.pretty()).with(filter).try_init()
    } else {
        Registry::default().with(layer.compact()).with(filter).try_init()
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Create an environment filter with fallback to default level
fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    // ROZKLADY_LOG_LEVEL, then RUST_LOG, then default
    let directive = std::env::var("ROZKLADY_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    filter_from_directive(&directive)
}

fn filter_from_directive(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive)
        .map_err(|e| LoggingError::InvalidFilter(format!("{}: {}", directive, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_create_env_filter_default() {
        if std::env::var("ROZKLADY_LOG_LEVEL").is_err() && std::env::var("RUST_LOG").is_err() {
            assert!(create_env_filter("warn").is_ok());
        }
    }

    #[test]
    fn test_filter_from_directive() {
        assert!(filter_from_directive("info").is_ok());
        assert!(filter_from_directive("rozklady_parser=trace,warn").is_ok());
    }

    #[test]
    fn test_invalid_directive_rejected() {
        let err = filter_from_directive("rozklady_parser=loudest").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter(_)));
        assert!(err.to_string().contains("rozklady_parser=loudest"));
    }

    #[test]
    fn test_env_mode_defaults_to_silent() {
        if std::env::var("ROZKLADY_LOG_MODE").is_err() {
            assert!(init_logging_from_env().is_ok());
        }
    }
}
