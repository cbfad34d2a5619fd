//! Error types for feed parsing

use thiserror::Error;

/// Errors that can occur while parsing a departure feed.
///
/// Only structural failures are errors. Missing or non-numeric attributes
/// never surface here; they resolve to `None` on the affected trip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document bytes are not well-formed XML
    #[error("Malformed departure feed: {0}")]
    MalformedFeed(String),
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
