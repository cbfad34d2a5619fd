//! Configuration for the feed client and for a monitored stop.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::{ClientError, Result};

/// Realtime timetable endpoint.
pub const DEFAULT_BASE_URL: &str = "http://rozklady.lodz.pl/Home/GetTimetableReal";

/// Prefix used when naming per-line displays.
pub const DEFAULT_NAME_PREFIX: &str = "Rozklady Lodz";

/// User agent sent with every feed request.
pub const DEFAULT_USER_AGENT: &str = concat!("rozklady-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`RozkladyClient`](crate::RozkladyClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint queried with `busStopNum=<stop>`
    /// Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Total request timeout
    /// Default: 10 seconds
    pub timeout: Duration,

    /// User-Agent header value
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feed endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// One monitored stop and the lines shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopConfig {
    /// Stop number as used by the feed
    pub stop_number: u32,

    /// Lines of interest, from a comma-separated list such as `"8, 10A"`
    #[serde(default, deserialize_with = "deserialize_lines")]
    pub lines: Vec<String>,

    /// Display name prefix
    #[serde(default = "default_name_prefix", rename = "name")]
    pub name_prefix: String,

    /// Keep only tram routes
    #[serde(default = "default_only_trams")]
    pub only_trams: bool,
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

fn default_only_trams() -> bool {
    true
}

fn deserialize_lines<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_lines(&raw))
}

/// Split a comma-separated line list, trimming entries and dropping empties.
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl StopConfig {
    /// Configuration for a stop with defaults for everything else
    pub fn new(stop_number: u32) -> Self {
        Self {
            stop_number,
            lines: Vec::new(),
            name_prefix: default_name_prefix(),
            only_trams: default_only_trams(),
        }
    }

    /// Set the lines of interest from a comma-separated list
    pub fn with_lines(mut self, lines: &str) -> Self {
        self.lines = parse_lines(lines);
        self
    }

    /// Set the display name prefix
    pub fn with_name_prefix(mut self, name_prefix: impl Into<String>) -> Self {
        self.name_prefix = name_prefix.into();
        self
    }

    /// Enable or disable the tram-only filter
    pub fn with_only_trams(mut self, only_trams: bool) -> Self {
        self.only_trams = only_trams;
        self
    }

    /// Display name for one line, e.g. "Rozklady Lodz 10A"
    pub fn display_name(&self, line: &str) -> String {
        format!("{} {}", self.name_prefix, line)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.stop_number == 0 {
            return Err(ClientError::InvalidStop(self.stop_number));
        }
        Ok(())
    }
}
