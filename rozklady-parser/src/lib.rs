//! # rozklady-parser
//!
//! Parser for the rozklady.lodz.pl realtime departure feed. Turns the raw XML
//! for one stop into departures grouped by line, each with a best-effort
//! "minutes until departure" derived from whatever fields the feed filled in.
//!
//! The crate does no I/O and keeps no state between calls; fetching the
//! document is left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use rozklady_parser::parse;
//!
//! let xml = br#"<Schedules time="23:50">
//!   <Stop name="Piotrkowska Centrum"/>
//!   <R nr="10A" vt="T" dir="Stoki"><S t="R" th="0" tm="5"/></R>
//! </Schedules>"#;
//!
//! let departures = parse(xml, true)?;
//! assert_eq!(departures.line("10A").unwrap().items[0].minutes, Some(15));
//! # Ok::<(), rozklady_parser::ParseError>(())
//! ```
//!
//! ### Pipeline stages
//! ```rust
//! use rozklady_parser::feed::{extract, resolve, ParseOptions};
//! ```

pub mod common;
pub mod departures;
pub mod error;
pub mod feed;
pub mod summary;

// Re-export error types for convenient top-level access
pub use error::{ParseError, ParseResult};

pub use departures::{parse, Departures};
pub use feed::{LineDepartures, ParseOptions, ResolvedTrip};
pub use summary::LineSummary;
