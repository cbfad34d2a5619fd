//! Error types for fetching departure feeds

use rozklady_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while fetching or configuring a stop feed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network communication error (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// The feed endpoint answered with a non-success status
    #[error("Feed request for stop {stop_number} failed with HTTP status {status}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// Stop that was requested
        stop_number: u32,
    },

    /// Stop numbers are positive integers
    #[error("Invalid stop number: {0}")]
    InvalidStop(u32),

    /// Configuration could not be used as given
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The fetched document could not be parsed
    #[error("Feed parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Convenience Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
