//! Merging routes into per-line departure lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::feed::resolver::ResolvedTrip;

/// Sort key for trips without resolved minutes; above any `u32` minute count.
pub const UNRESOLVED_SORT_KEY: u64 = u32::MAX as u64 + 1;

/// A route after every trip has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub line_id: String,
    pub direction: String,
    pub trips: Vec<ResolvedTrip>,
}

/// All departures of one line at the stop.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineDepartures {
    /// First non-empty direction seen for the line
    pub direction: String,
    /// Resolved trips first, ascending by minutes; unresolved trips last
    pub items: Vec<ResolvedTrip>,
}

impl LineDepartures {
    /// The first departure with known minutes.
    pub fn next_minutes(&self) -> Option<u32> {
        self.items.iter().find_map(|item| item.minutes)
    }
}

/// Fold routes into a map keyed by line id, then order each line's trips.
///
/// Routes for the same line append to the existing entry. The direction is
/// backfilled only while the entry's direction is still empty.
pub fn group_by_line<I>(routes: I) -> BTreeMap<String, LineDepartures>
where
    I: IntoIterator<Item = ResolvedRoute>,
{
    let mut lines = routes
        .into_iter()
        .fold(BTreeMap::new(), |mut lines: BTreeMap<String, LineDepartures>, route| {
            let entry = lines.entry(route.line_id).or_default();
            if entry.direction.is_empty() {
                entry.direction = route.direction;
            }
            entry.items.extend(route.trips);
            lines
        });

    for line in lines.values_mut() {
        sort_departures(&mut line.items);
    }
    lines
}

/// Stable sort by resolved minutes, unresolved trips last.
pub fn sort_departures(items: &mut [ResolvedTrip]) {
    items.sort_by_key(|item| item.minutes.map_or(UNRESOLVED_SORT_KEY, u64::from));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(label: &str, minutes: Option<u32>) -> ResolvedTrip {
        ResolvedTrip {
            hour_text: String::new(),
            minute_text: label.to_string(),
            type_code: String::new(),
            minutes_field: minutes.map(i64::from),
            seconds_field: None,
            minutes,
            display_text: label.to_string(),
        }
    }

    fn route(line_id: &str, direction: &str, trips: Vec<ResolvedTrip>) -> ResolvedRoute {
        ResolvedRoute {
            line_id: line_id.to_string(),
            direction: direction.to_string(),
            trips,
        }
    }

    fn labels(line: &LineDepartures) -> Vec<&str> {
        line.items.iter().map(|i| i.display_text.as_str()).collect()
    }

    #[test]
    fn test_merge_backfills_direction() {
        let lines = group_by_line(vec![
            route("10A", "", vec![resolved("a", Some(4))]),
            route("10A", "Stoki", vec![resolved("b", Some(2))]),
            route("10A", "Retkinia", vec![resolved("c", Some(1))]),
        ]);

        assert_eq!(lines.len(), 1);
        let line = &lines["10A"];
        assert_eq!(line.direction, "Stoki");
        assert_eq!(labels(line), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_first_direction_kept() {
        let lines = group_by_line(vec![
            route("8", "Dąbrowa", vec![]),
            route("8", "Zdrowie", vec![]),
        ]);
        assert_eq!(lines["8"].direction, "Dąbrowa");
        assert!(lines["8"].items.is_empty());
    }

    #[test]
    fn test_unresolved_sorted_last_and_stable() {
        let lines = group_by_line(vec![route(
            "12",
            "Stoki",
            vec![
                resolved("x", None),
                resolved("late", Some(9)),
                resolved("tie-1", Some(3)),
                resolved("y", None),
                resolved("tie-2", Some(3)),
                resolved("max", Some(u32::MAX)),
            ],
        )]);

        assert_eq!(
            labels(&lines["12"]),
            vec!["tie-1", "tie-2", "late", "max", "x", "y"]
        );
    }

    #[test]
    fn test_lines_kept_separate() {
        let lines = group_by_line(vec![
            route("8", "A", vec![resolved("a", Some(1))]),
            route("10A", "B", vec![resolved("b", Some(2))]),
        ]);
        let keys: Vec<&str> = lines.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["10A", "8"]);
    }

    #[test]
    fn test_next_minutes() {
        let line = LineDepartures {
            direction: String::new(),
            items: vec![resolved("a", None), resolved("b", Some(6))],
        };
        assert_eq!(line.next_minutes(), Some(6));
        assert_eq!(LineDepartures::default().next_minutes(), None);
    }
}
