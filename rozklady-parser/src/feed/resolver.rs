//! Minutes-until-departure resolution.
//!
//! The feed reports remaining time in up to four inconsistent ways. Each is
//! read by its own rule; the first rule producing a value wins:
//!
//! 1. [`from_seconds`]: seconds remaining, rounded up to whole minutes
//! 2. [`from_minutes_field`]: explicit minutes remaining
//! 3. [`from_absolute_time`]: scheduled clock time minus server clock, mod 24h
//! 4. [`from_minute_digits`]: digits scraped from the minute text

use serde::{Deserialize, Serialize};

use crate::common::{digits, parse_int_strict, to_int};
use crate::feed::extractor::RawTrip;

/// Minutes in one day, the modulus for clock arithmetic.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parsed inputs shared by every resolution rule.
#[derive(Debug, Clone, Copy)]
pub struct TripInputs<'a> {
    pub hour_text: &'a str,
    pub minute_text: &'a str,
    pub minutes_field: Option<i64>,
    pub seconds_field: Option<i64>,
    pub server_minutes: Option<i64>,
}

impl<'a> TripInputs<'a> {
    pub fn new(trip: &'a RawTrip, server_minutes: Option<i64>) -> Self {
        Self {
            hour_text: &trip.hour,
            minute_text: &trip.minute,
            minutes_field: to_int(&trip.minutes),
            seconds_field: to_int(&trip.seconds),
            server_minutes,
        }
    }
}

/// A resolution rule: a total function that may or may not produce minutes.
pub type Rule = fn(&TripInputs<'_>) -> Option<i64>;

/// Resolution rules in priority order.
pub const RULES: [Rule; 4] = [
    from_seconds,
    from_minutes_field,
    from_absolute_time,
    from_minute_digits,
];

/// Seconds remaining, rounded up to the next full minute and never negative.
pub fn from_seconds(inputs: &TripInputs<'_>) -> Option<i64> {
    inputs.seconds_field.map(|seconds| {
        let whole = seconds.div_euclid(60) + i64::from(seconds.rem_euclid(60) != 0);
        whole.max(0)
    })
}

/// The explicit minutes-remaining field.
pub fn from_minutes_field(inputs: &TripInputs<'_>) -> Option<i64> {
    inputs.minutes_field
}

/// Scheduled `th:tm` minus the server clock, wrapped into `[0, 1439]`.
///
/// Needs a resolved server clock and non-empty hour and minute text. When
/// the clock text is not a pair of integers, falls back to the minute
/// text's digit run.
pub fn from_absolute_time(inputs: &TripInputs<'_>) -> Option<i64> {
    let server_minutes = inputs.server_minutes?;
    if inputs.hour_text.is_empty() || inputs.minute_text.is_empty() {
        return None;
    }

    match (
        parse_int_strict(inputs.hour_text),
        parse_int_strict(inputs.minute_text),
    ) {
        (Some(hour), Some(minute)) => {
            let departure = hour
                .checked_mul(60)?
                .checked_add(minute)?
                .rem_euclid(MINUTES_PER_DAY);
            Some(departure.checked_sub(server_minutes)?.rem_euclid(MINUTES_PER_DAY))
        }
        _ => digits(inputs.minute_text),
    }
}

/// First digit run in the minute text.
pub fn from_minute_digits(inputs: &TripInputs<'_>) -> Option<i64> {
    digits(inputs.minute_text)
}

/// Run the rule chain, first value wins, clamped to a non-negative minute count.
pub fn resolve_minutes(inputs: &TripInputs<'_>) -> Option<u32> {
    RULES
        .iter()
        .find_map(|rule| rule(inputs))
        .map(|minutes| u32::try_from(minutes.max(0)).unwrap_or(u32::MAX))
}

/// One trip with its resolved minutes and display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTrip {
    pub hour_text: String,
    pub minute_text: String,
    pub type_code: String,
    /// Parsed `m` attribute
    pub minutes_field: Option<i64>,
    /// Parsed `s` attribute
    pub seconds_field: Option<i64>,
    /// Best-effort minutes until departure
    pub minutes: Option<u32>,
    pub display_text: String,
}

/// Resolve one raw trip against the feed's server clock.
pub fn resolve(trip: &RawTrip, server_minutes: Option<i64>) -> ResolvedTrip {
    let inputs = TripInputs::new(trip, server_minutes);
    let minutes = resolve_minutes(&inputs);

    ResolvedTrip {
        hour_text: trip.hour.clone(),
        minute_text: trip.minute.clone(),
        type_code: trip.type_code.clone(),
        minutes_field: inputs.minutes_field,
        seconds_field: inputs.seconds_field,
        minutes,
        display_text: display_text(trip, minutes),
    }
}

/// Human-readable departure text with a `[t=.., m=..]` diagnostic suffix.
///
/// Prefers the scheduled clock time, then the raw minute text, then the
/// resolved minutes.
pub fn display_text(trip: &RawTrip, minutes: Option<u32>) -> String {
    let main = if !trip.hour.is_empty() {
        let minute = if trip.minute.is_empty() {
            "00".to_string()
        } else {
            zero_pad(&trip.minute, 2)
        };
        format!("{}:{}", trip.hour, minute)
    } else if !trip.minute.is_empty() {
        trip.minute.clone()
    } else {
        minutes.map(|m| format!("{} min", m)).unwrap_or_default()
    };

    format!("{} [t={}, m={}]", main, trip.type_code, trip.minutes)
        .trim()
        .to_string()
}

/// Left-pad with zeros to `width` characters, keeping a leading sign first.
fn zero_pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let fill = "0".repeat(width - len);
    match text.strip_prefix(|c: char| c == '+' || c == '-') {
        Some(rest) => format!("{}{}{}", &text[..1], fill, rest),
        None => format!("{}{}", fill, text),
    }
}
