//! Departure feed pipeline
//!
//! Raw bytes flow through three stages:
//!
//! - [`extractor`]: walks the XML document and pulls raw route/trip attributes
//! - [`resolver`]: derives minutes-until-departure and display text per trip
//! - [`grouping`]: merges routes by line and orders each line's departures

pub mod extractor;
pub mod grouping;
pub mod resolver;

pub use extractor::{
    extract, ExtractedFeed, Feed, ParseOptions, RawRoute, RawTrip, TRAM_VEHICLE_TYPE,
};
pub use grouping::{group_by_line, LineDepartures, ResolvedRoute};
pub use resolver::{resolve, ResolvedTrip};
