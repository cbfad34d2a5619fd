//! Blocking HTTP client for the realtime departure feed.
//!
//! The client only retrieves bytes and hands them to `rozklady_parser`.
//! It does not retry and does not cache; callers own the polling policy.

use rozklady_parser::{parse, Departures};

use crate::config::{ClientConfig, StopConfig};
use crate::error::{ClientError, Result};

/// Query parameter carrying the stop number.
const STOP_QUERY_PARAM: &str = "busStopNum";

/// Client for one feed endpoint.
///
/// Cheap to clone; clones share the underlying connection pool. Safe to use
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct RozkladyClient {
    http_client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl RozkladyClient {
    /// Create a client for the public endpoint with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the raw feed document for a stop.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidStop`] for stop number 0
    /// - [`ClientError::Network`] if the request or body read fails
    /// - [`ClientError::Status`] for a non-success HTTP status
    pub fn fetch_xml(&self, stop_number: u32) -> Result<Vec<u8>> {
        if stop_number == 0 {
            return Err(ClientError::InvalidStop(stop_number));
        }

        tracing::debug!("Fetching departures for stop {}", stop_number);

        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[(STOP_QUERY_PARAM, stop_number.to_string())])
            .send()
            .map_err(|e| {
                tracing::warn!("Feed request for stop {} failed: {}", stop_number, e);
                ClientError::Network(format!("Failed to fetch feed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Feed for stop {} returned HTTP {}", stop_number, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                stop_number,
            });
        }

        let body = response
            .bytes()
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;

        Ok(body.to_vec())
    }

    /// Fetch and parse the departures for a stop.
    pub fn fetch_departures(&self, stop_number: u32, only_trams: bool) -> Result<Departures> {
        let xml = self.fetch_xml(stop_number)?;
        let departures = parse(&xml, only_trams)?;

        tracing::debug!(
            "Stop {} ({}): {} trip(s) on {} line(s)",
            stop_number,
            departures.stop_name,
            departures.trip_count(),
            departures.departures.len()
        );

        Ok(departures)
    }

    /// Fetch and parse the departures for a configured stop.
    pub fn fetch_stop(&self, stop: &StopConfig) -> Result<Departures> {
        stop.validate()?;
        self.fetch_departures(stop.stop_number, stop.only_trams)
    }
}
