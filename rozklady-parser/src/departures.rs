//! Parse entry point: raw feed bytes to per-line departures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ParseResult;
use crate::feed::{extract, group_by_line, resolve, LineDepartures, ParseOptions, ResolvedRoute};

/// Departures at one stop, grouped by line.
///
/// Built fresh from a single document; holds no reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Departures {
    pub stop_name: String,
    pub server_time: Option<String>,
    /// Keyed by line id, in lexicographic order
    pub departures: BTreeMap<String, LineDepartures>,
}

impl Departures {
    /// Parse a departure feed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedFeed`](crate::ParseError::MalformedFeed)
    /// when the bytes are not well-formed XML. No partial result is produced.
    pub fn from_xml(xml: &[u8], options: &ParseOptions) -> ParseResult<Self> {
        let extracted = extract(xml, options)?;
        let server_minutes = extracted.feed.server_minutes;

        let routes = extracted.routes.into_iter().map(|route| ResolvedRoute {
            trips: route
                .trips
                .iter()
                .map(|trip| resolve(trip, server_minutes))
                .collect(),
            line_id: route.line_id,
            direction: route.direction,
        });
        let departures = group_by_line(routes);

        tracing::debug!(
            "Parsed {} line(s) for stop '{}'",
            departures.len(),
            extracted.feed.stop_name
        );

        Ok(Self {
            stop_name: extracted.feed.stop_name,
            server_time: extracted.feed.server_time,
            departures,
        })
    }

    /// Departures of one line, if the feed lists it.
    pub fn line(&self, line_id: &str) -> Option<&LineDepartures> {
        self.departures.get(line_id)
    }

    /// Line ids present in the feed.
    pub fn line_ids(&self) -> impl Iterator<Item = &str> {
        self.departures.keys().map(String::as_str)
    }

    /// Total number of trips across every line.
    pub fn trip_count(&self) -> usize {
        self.departures.values().map(|line| line.items.len()).sum()
    }
}

/// Parse a departure feed, optionally keeping only tram routes.
///
/// Convenience wrapper around [`Departures::from_xml`].
pub fn parse(xml: &[u8], only_trams: bool) -> ParseResult<Departures> {
    Departures::from_xml(xml, &ParseOptions::new(only_trams))
}
