//! Time-based activity distributions.
//!
//! Groupings over the normalized date/hour fields: per-day and per-month
//! timelines, a weekday profile, and the hour-by-weekday heatmap. Weekday
//! rows are always Monday-first so the heatmap and the weekday profile line
//! up.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::Message;
use crate::message::month_name;

/// Weekday labels in row order used by [`weekday_activity`] and
/// [`hourly_heatmap`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Message counts per calendar date, ascending.
///
/// Dates with no messages are absent from the result.
pub fn daily_timeline(messages: &[Message]) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in messages {
        *counts.entry(msg.date).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Message counts per month name, in calendar order.
///
/// Grouping is by month name alone (all Januaries together regardless of
/// year); months with no messages are absent from the result.
pub fn monthly_activity(messages: &[Message]) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; 12];
    for msg in messages {
        counts[msg.date.month0() as usize] += 1;
    }

    (0..12)
        .filter(|&m| counts[m] > 0)
        .map(|m| (month_name(m), counts[m]))
        .collect()
}

/// Message counts per weekday, Monday-first, zeros included.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
/// use chatlens::stats::weekday_activity;
///
/// // 1 Feb 2024 is a Thursday
/// let messages = parse("1/2/2024, 9:05 am - Alice: Hello");
/// let profile = weekday_activity(&messages);
/// assert_eq!(profile[3], ("Thursday", 1));
/// ```
pub fn weekday_activity(messages: &[Message]) -> [(&'static str, usize); 7] {
    let mut counts = [0usize; 7];
    for msg in messages {
        counts[msg.date.weekday().num_days_from_monday() as usize] += 1;
    }

    std::array::from_fn(|i| (WEEKDAY_NAMES[i], counts[i]))
}

/// Message counts per `(weekday, hour)` cell.
///
/// Rows are weekdays Monday-first (matching [`WEEKDAY_NAMES`]), columns are
/// hours 0–23.
pub fn hourly_heatmap(messages: &[Message]) -> [[usize; 24]; 7] {
    let mut grid = [[0usize; 24]; 7];
    for msg in messages {
        let row = msg.date.weekday().num_days_from_monday() as usize;
        grid[row][msg.hour as usize] += 1;
    }
    grid
}
