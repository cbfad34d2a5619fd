//! Tolerant numeric parsing for feed attributes.
//!
//! Every attribute in the feed is an untrusted string. These helpers never
//! fail: anything that cannot be read as a number comes back as `None`.

/// Extract the first run of ASCII decimal digits found anywhere in `value`.
///
/// `"~7 min"` yields `Some(7)`, `"abc"` yields `None`. A run too long to fit
/// an `i64` also yields `None`.
///
/// Only ASCII `0-9` count as digits; other Unicode decimal digits (for
/// example Arabic-Indic `٣`) are treated as text.
pub fn digits(value: &str) -> Option<i64> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let run = &value[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    run[..end].parse().ok()
}

/// Strict integer parse: optional sign, digits, surrounding whitespace allowed.
pub fn parse_int_strict(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parse an integer, falling back to the first digit run.
///
/// # Examples
///
/// ```
/// use rozklady_parser::common::to_int;
///
/// assert_eq!(to_int("12"), Some(12));
/// assert_eq!(to_int("-3"), Some(-3));
/// assert_eq!(to_int("≈12 min"), Some(12));
/// assert_eq!(to_int(""), None);
/// assert_eq!(to_int("n/a"), None);
/// ```
pub fn to_int(value: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    parse_int_strict(value).or_else(|| digits(value))
}

/// Convert an `"HH:MM"` clock string into minutes since midnight.
///
/// Exactly two `:`-separated integer parts are required. Values are not
/// range-checked, so `"25:00"` gives `1500`.
pub fn hhmm_to_minutes(hhmm: &str) -> Option<i64> {
    let (hours, minutes) = hhmm.split_once(':')?;
    if minutes.contains(':') {
        return None;
    }
    parse_int_strict(hours)?
        .checked_mul(60)?
        .checked_add(parse_int_strict(minutes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_first_run() {
        assert_eq!(digits("12"), Some(12));
        assert_eq!(digits("~7 min"), Some(7));
        assert_eq!(digits("za 3 min, potem 9"), Some(3));
        assert_eq!(digits("<1"), Some(1));
        assert_eq!(digits("min"), None);
        assert_eq!(digits(""), None);
    }

    #[test]
    fn test_digits_ascii_only() {
        assert_eq!(digits("٣ min"), None);
        assert_eq!(digits("٣ / 4"), Some(4));
    }

    #[test]
    fn test_digits_overflow() {
        assert_eq!(digits("99999999999999999999999"), None);
    }

    #[test]
    fn test_to_int_direct_and_fallback() {
        assert_eq!(to_int("42"), Some(42));
        assert_eq!(to_int("+5"), Some(5));
        assert_eq!(to_int("-120"), Some(-120));
        assert_eq!(to_int("5 min"), Some(5));
        // Digit scrape drops the sign
        assert_eq!(to_int("- 4"), Some(4));
        assert_eq!(to_int("brak"), None);
    }

    #[test]
    fn test_hhmm_to_minutes() {
        assert_eq!(hhmm_to_minutes("23:50"), Some(1430));
        assert_eq!(hhmm_to_minutes("00:05"), Some(5));
        assert_eq!(hhmm_to_minutes("7:3"), Some(423));
        assert_eq!(hhmm_to_minutes("25:00"), Some(1500));
    }

    #[test]
    fn test_hhmm_to_minutes_invalid() {
        assert_eq!(hhmm_to_minutes(""), None);
        assert_eq!(hhmm_to_minutes("1200"), None);
        assert_eq!(hhmm_to_minutes("12:00:00"), None);
        assert_eq!(hhmm_to_minutes("ab:cd"), None);
        assert_eq!(hhmm_to_minutes("12:"), None);
    }
}
