//! Date and time token normalization.
//!
//! The parser captures the date and time tokens of a message line as raw
//! text; this module turns them into typed calendar values. Both functions
//! return `Option` rather than an error: a token that fails to parse means
//! the whole line is dropped, consistent with the parser's best-effort
//! policy. No partially-populated records are ever emitted.
//!
//! Times are interpreted exactly as written, with no timezone conversion.

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Narrow no-break space some mobile platforms insert before the am/pm suffix.
const NARROW_NBSP: char = '\u{202f}';

/// Strips the narrow no-break space or ordinary space before the am/pm
/// suffix, yielding the canonical `H:MMam` / `H:MMpm` form.
///
/// Both space variants occur in real exports depending on the device that
/// produced them; they carry no information and are removed wholesale.
pub fn canonical_time_token(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c != ' ' && c != NARROW_NBSP)
        .collect()
}

/// Parses a `D/M/YYYY` or `DD/MM/YYYY` date token.
///
/// Returns `None` for calendar-invalid dates (e.g. `31/2/2024`), which the
/// scanner treats as a dropped line.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%d/%m/%Y").ok()
}

/// Parses a 12-hour time token into `(hour, minute)` on a 24-hour clock.
///
/// Accepts `9:05 am`, `9:05am`, and the narrow no-break space variant; the
/// am/pm suffix is case-insensitive. Returns `None` when the clock value is
/// out of range for a 12-hour reading (e.g. `13:00 pm` or `0:30 am`).
///
/// # Examples
///
/// ```
/// use chatlens::normalize::parse_time_token;
///
/// assert_eq!(parse_time_token("9:05\u{202f}pm"), Some((21, 5)));
/// assert_eq!(parse_time_token("12:00 AM"), Some((0, 0)));
/// assert_eq!(parse_time_token("13:00 pm"), None);
/// ```
pub fn parse_time_token(token: &str) -> Option<(u32, u32)> {
    let canonical = canonical_time_token(token);
    let time = NaiveTime::parse_from_str(&canonical, "%I:%M%p").ok()?;
    Some((time.hour(), time.minute()))
}
