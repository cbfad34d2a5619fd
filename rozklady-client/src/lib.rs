//! Feed client for rozklady.lodz.pl realtime departures
//!
//! Fetches the departure document for a stop over HTTP and parses it with
//! [`rozklady_parser`].
//!
//! # Quick Start
//!
//! ```no_run
//! use rozklady_client::{RozkladyClient, StopConfig};
//!
//! let client = RozkladyClient::new()?;
//! let stop = StopConfig::new(1052).with_lines("8, 10A");
//!
//! let departures = client.fetch_stop(&stop)?;
//! for line in &stop.lines {
//!     let summary = departures.summary(line);
//!     println!("{}: {:?} min", stop.display_name(line), summary.next_minutes);
//! }
//! # Ok::<(), rozklady_client::ClientError>(())
//! ```

mod client;
pub mod config;
mod error;
pub mod logging;

pub use client::RozkladyClient;
pub use config::{ClientConfig, StopConfig};
pub use error::{ClientError, Result};

// Re-export the parser types callers need alongside the client
pub use rozklady_parser::{Departures, LineDepartures, LineSummary, ParseError, ResolvedTrip};
