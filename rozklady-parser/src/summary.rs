//! Per-line summaries for display surfaces.
//!
//! A summary is what a "next tram" sensor shows for one configured line:
//! the minutes to the next departure plus the ordered lists behind it.

use serde::{Deserialize, Serialize};

use crate::departures::Departures;

/// Display-ready view of one line at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    pub line: String,
    pub stop_name: String,
    /// `None` when the line is not in the feed
    pub direction: Option<String>,
    /// Minutes to the first departure with known minutes
    pub next_minutes: Option<u32>,
    /// Known minutes only, in departure order
    pub minutes_list: Vec<u32>,
    /// Display text of every departure, in departure order
    pub display_list: Vec<String>,
}

impl Departures {
    /// Summarise one line. Lines missing from the feed give an empty summary.
    pub fn summary(&self, line: &str) -> LineSummary {
        let departures = self.line(line);

        LineSummary {
            line: line.to_string(),
            stop_name: self.stop_name.clone(),
            direction: departures.map(|d| d.direction.clone()),
            next_minutes: departures.and_then(|d| d.next_minutes()),
            minutes_list: departures
                .map(|d| d.items.iter().filter_map(|item| item.minutes).collect())
                .unwrap_or_default(),
            display_list: departures
                .map(|d| d.items.iter().map(|item| item.display_text.clone()).collect())
                .unwrap_or_default(),
        }
    }

    /// Summarise several lines, in the order given.
    pub fn summaries<'a, I>(&self, lines: I) -> Vec<LineSummary>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|line| self.summary(line)).collect()
    }
}
