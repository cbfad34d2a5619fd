//! Field extraction from the realtime departure XML.
//!
//! The feed looks roughly like this:
//! ```xml
//! <Schedules time="12:04">
//!   <Stop id="1052" name="Piotrkowska Centrum">
//!     <Day desc="...">
//!       <R nr="10A" vt="T" dir="Stoki">
//!         <S t="R" th="12" tm="10" m="6" s="355"/>
//!       </R>
//!     </Day>
//!   </Stop>
//! </Schedules>
//! ```
//! Nothing here is trusted: every attribute may be missing or hold free text.

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::common::{attr, child_elements, descendants, hhmm_to_minutes, parse_document};
use crate::error::ParseResult;

/// Vehicle type code the feed uses for trams.
pub const TRAM_VEHICLE_TYPE: &str = "T";

/// Options controlling which routes are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Keep only tram routes (and routes with no vehicle type)
    #[serde(default = "default_only_trams")]
    pub only_trams: bool,
}

fn default_only_trams() -> bool {
    true
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            only_trams: default_only_trams(),
        }
    }
}

impl ParseOptions {
    /// Options with the tram filter set explicitly.
    pub fn new(only_trams: bool) -> Self {
        Self { only_trams }
    }

    /// Whether a route with this vehicle type code passes the filter.
    ///
    /// An empty code means the feed did not say, and is always accepted.
    pub fn accepts(&self, vehicle_type: &str) -> bool {
        !self.only_trams || vehicle_type.is_empty() || vehicle_type == TRAM_VEHICLE_TYPE
    }
}

/// Document-level attributes of one feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feed {
    /// Server clock as sent ("HH:MM"), `None` when absent or empty
    pub server_time: Option<String>,
    /// `server_time` as minutes since midnight, `None` when unparseable
    pub server_minutes: Option<i64>,
    /// Name of the first `Stop` element, empty when there is none
    pub stop_name: String,
}

/// Raw attribute bundle of one `S` element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTrip {
    /// Absolute departure hour (`th`)
    pub hour: String,
    /// Absolute departure minute, or free-form minute text (`tm`)
    pub minute: String,
    /// Departure type code (`t`)
    pub type_code: String,
    /// Minutes remaining (`m`)
    pub minutes: String,
    /// Seconds remaining (`s`)
    pub seconds: String,
}

impl RawTrip {
    fn from_element(element: &Element) -> Self {
        Self {
            hour: attr(element, "th"),
            minute: attr(element, "tm"),
            type_code: attr(element, "t"),
            minutes: attr(element, "m"),
            seconds: attr(element, "s"),
        }
    }
}

/// One `R` element with its trips, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRoute {
    pub vehicle_type: String,
    pub line_id: String,
    pub direction: String,
    pub trips: Vec<RawTrip>,
}

/// Everything the extractor pulls out of one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedFeed {
    pub feed: Feed,
    /// Routes that passed the vehicle filter
    pub routes: Vec<RawRoute>,
}

/// Parse `xml` and extract the feed header and every accepted route.
///
/// # Errors
///
/// Returns [`ParseError::MalformedFeed`](crate::ParseError::MalformedFeed) if
/// the bytes are not well-formed XML with a single root element.
pub fn extract(xml: &[u8], options: &ParseOptions) -> ParseResult<ExtractedFeed> {
    let root = parse_document(xml)?;

    let feed = read_feed(&root);
    let routes = descendants(&root)
        .filter(|element| element.name == "R")
        .filter_map(|element| read_route(element, options))
        .collect();

    Ok(ExtractedFeed { feed, routes })
}

fn read_feed(root: &Element) -> Feed {
    let server_time = Some(attr(root, "time")).filter(|time| !time.is_empty());
    let server_minutes = server_time.as_deref().and_then(hhmm_to_minutes);
    if server_time.is_some() && server_minutes.is_none() {
        tracing::debug!(
            "Unparseable server time {:?}, absolute-time fallback disabled",
            server_time
        );
    }

    let stop_name = descendants(root)
        .find(|element| element.name == "Stop")
        .map(|stop| attr(stop, "name"))
        .unwrap_or_default();

    Feed {
        server_time,
        server_minutes,
        stop_name,
    }
}

fn read_route(element: &Element, options: &ParseOptions) -> Option<RawRoute> {
    let vehicle_type = attr(element, "vt");
    let line_id = attr(element, "nr");

    if !options.accepts(&vehicle_type) {
        tracing::debug!(
            "Skipping line {} with vehicle type {}",
            line_id,
            vehicle_type
        );
        return None;
    }

    Some(RawRoute {
        direction: attr(element, "dir"),
        trips: child_elements(element, "S").map(RawTrip::from_element).collect(),
        vehicle_type,
        line_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Schedules time="12:04">
  <Stop id="1052" name="Piotrkowska Centrum">
    <Day desc="Dzień powszedni">
      <R nr="10A" vt="T" dir="Stoki">
        <S t="R" th="12" tm="10" m="6" s="355"/>
        <S t="S" th="12" tm="25"/>
      </R>
      <R nr="86" vt="A" dir="Kurczaki">
        <S t="R" m="2" s="100"/>
      </R>
      <R nr="8" dir="">
        <S tm="5 min"/>
      </R>
    </Day>
  </Stop>
</Schedules>"#;

    #[test]
    fn test_extract_feed_header() {
        let extracted = extract(SAMPLE_XML.as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(extracted.feed.server_time.as_deref(), Some("12:04"));
        assert_eq!(extracted.feed.server_minutes, Some(724));
        assert_eq!(extracted.feed.stop_name, "Piotrkowska Centrum");
    }

    #[test]
    fn test_extract_routes_with_tram_filter() {
        let extracted = extract(SAMPLE_XML.as_bytes(), &ParseOptions::default()).unwrap();
        let lines: Vec<&str> = extracted.routes.iter().map(|r| r.line_id.as_str()).collect();
        assert_eq!(lines, vec!["10A", "8"]);

        let tram = &extracted.routes[0];
        assert_eq!(tram.vehicle_type, "T");
        assert_eq!(tram.direction, "Stoki");
        assert_eq!(tram.trips.len(), 2);
        assert_eq!(
            tram.trips[0],
            RawTrip {
                hour: "12".to_string(),
                minute: "10".to_string(),
                type_code: "R".to_string(),
                minutes: "6".to_string(),
                seconds: "355".to_string(),
            }
        );
        assert_eq!(tram.trips[1].seconds, "");
        assert_eq!(tram.trips[1].minutes, "");
    }

    #[test]
    fn test_extract_routes_without_filter() {
        let extracted = extract(SAMPLE_XML.as_bytes(), &ParseOptions::new(false)).unwrap();
        assert_eq!(extracted.routes.len(), 3);
        assert_eq!(extracted.routes[1].line_id, "86");
        assert_eq!(extracted.routes[1].trips[0].minutes, "2");
    }

    #[test]
    fn test_missing_time_and_stop() {
        let xml = r#"<Schedules><R nr="1" vt="T"><S m="3"/></R></Schedules>"#;
        let extracted = extract(xml.as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(extracted.feed.server_time, None);
        assert_eq!(extracted.feed.server_minutes, None);
        assert_eq!(extracted.feed.stop_name, "");
        assert_eq!(extracted.routes.len(), 1);
    }

    #[test]
    fn test_unparseable_time_keeps_raw_text() {
        let xml = r#"<Schedules time="noon"/>"#;
        let extracted = extract(xml.as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(extracted.feed.server_time.as_deref(), Some("noon"));
        assert_eq!(extracted.feed.server_minutes, None);
    }

    #[test]
    fn test_nested_trip_elements_ignored() {
        let xml = r#"<Schedules><R nr="2"><S m="1"/><Extra><S m="9"/></Extra></R></Schedules>"#;
        let extracted = extract(xml.as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(extracted.routes[0].trips.len(), 1);
        assert_eq!(extracted.routes[0].trips[0].minutes, "1");
    }

    #[test]
    fn test_malformed_feed() {
        let result = extract(b"<Schedules><R nr=\"1\">", &ParseOptions::default());
        assert!(matches!(result, Err(ParseError::MalformedFeed(_))));

        let result = extract(b"", &ParseOptions::default());
        assert!(matches!(result, Err(ParseError::MalformedFeed(_))));
    }

    #[test]
    fn test_second_root_is_malformed() {
        let xml = r#"<Schedules time="12:00"/><Schedules><R nr="1"><S m="2"/></R></Schedules>"#;
        let result = extract(xml.as_bytes(), &ParseOptions::default());
        assert!(matches!(result, Err(ParseError::MalformedFeed(_))));
    }

    #[test]
    fn test_accepts() {
        let trams = ParseOptions::default();
        assert!(trams.accepts("T"));
        assert!(trams.accepts(""));
        assert!(!trams.accepts("A"));
        assert!(!trams.accepts("t"));

        let everything = ParseOptions::new(false);
        assert!(everything.accepts("A"));
    }
}
