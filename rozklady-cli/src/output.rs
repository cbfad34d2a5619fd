//! Text rendering of line summaries.

use rozklady_client::StopConfig;
use rozklady_parser::{Departures, LineSummary};

/// Lines to show: the configured ones, or every line in the feed.
pub fn selected_lines(stop: &StopConfig, departures: &Departures) -> Vec<String> {
    if stop.lines.is_empty() {
        departures.line_ids().map(str::to_string).collect()
    } else {
        stop.lines.clone()
    }
}

/// Render one summary as a block of text.
pub fn render_summary(stop: &StopConfig, summary: &LineSummary) -> String {
    let mut out = String::new();

    let next = summary
        .next_minutes
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("{}: {}\n", stop.display_name(&summary.line), next));

    match summary.direction.as_deref() {
        Some("") | None => {}
        Some(direction) => out.push_str(&format!("  direction: {}\n", direction)),
    }

    if summary.display_list.is_empty() {
        out.push_str("  no departures\n");
    }
    for display in &summary.display_list {
        out.push_str(&format!("  - {}\n", display));
    }

    out
}

/// Render the whole stop: a header line followed by one block per line.
pub fn render_departures(stop: &StopConfig, departures: &Departures) -> String {
    let mut out = format!(
        "{} (stop {})",
        if departures.stop_name.is_empty() {
            "Unknown stop"
        } else {
            departures.stop_name.as_str()
        },
        stop.stop_number
    );
    if let Some(time) = &departures.server_time {
        out.push_str(&format!(" at {}", time));
    }
    out.push('\n');

    let lines = selected_lines(stop, departures);
    for summary in departures.summaries(lines.iter().map(String::as_str)) {
        out.push_str(&render_summary(stop, &summary));
    }
    out
}
